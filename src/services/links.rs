// src/services/links.rs

//! Listing link indexer.
//!
//! Turns a listing page of subject cards into a `LinkTable` keyed by the
//! subject slug found in each card's link.

use std::collections::HashSet;

use url::Url;

use crate::error::Result;
use crate::models::LinkTable;
use crate::utils::html::HtmlDocument;
use crate::utils::http::PageFetcher;
use crate::utils::{resolve_url, subject_key};

/// Anchors at the bottom of each listing card.
pub const CARD_LINK_SELECTOR: &str = ".wpgb-card-media-content-bottom > a[href]";

/// Service for indexing the subject links of a listing page.
pub struct LinkIndexer<'a> {
    fetcher: &'a dyn PageFetcher,
}

impl<'a> LinkIndexer<'a> {
    /// Create a new link indexer.
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch a listing page and build its link table.
    pub fn index(&self, document_url: &str) -> Result<LinkTable> {
        let base = Url::parse(document_url)?;
        let document = self.fetcher.fetch_document(document_url)?;
        let table = Self::build_table(&document, &base)?;

        log::debug!("Indexed {} subject(s) from {}", table.len(), document_url);
        Ok(table)
    }

    /// Build the link table from an already parsed listing page.
    ///
    /// Hrefs are deduplicated first. When two distinct hrefs derive the same
    /// key the one earlier in the document is kept.
    pub fn build_table(document: &HtmlDocument, base: &Url) -> Result<LinkTable> {
        let hrefs = document.select_attrs(CARD_LINK_SELECTOR, "href")?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut table = LinkTable::default();

        for href in &hrefs {
            if !seen.insert(href.as_str()) {
                continue;
            }

            let Some(key) = subject_key(href) else {
                log::warn!("Skipping card link without a subject segment: {}", href);
                continue;
            };

            let url = resolve_url(base, href);
            if let Some(existing) = table.insert_first(key.to_string(), url) {
                log::warn!(
                    "Duplicate subject key '{}': keeping {}, ignoring {}",
                    key,
                    existing,
                    href
                );
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubFetcher, listing_page};

    const LISTING: &str = "https://example.com/kurser/";

    #[test]
    fn test_index_counts_unique_hrefs() {
        let html = listing_page(&[
            "https://example.com/kurser/matematik/",
            "https://example.com/kurser/svenska/",
            "https://example.com/kurser/matematik/",
            "https://example.com/kurser/engelska/",
            "https://example.com/kurser/svenska/",
        ]);
        let fetcher = StubFetcher::new().with_page(LISTING, &html);

        let table = LinkIndexer::new(&fetcher).index(LISTING).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            vec!["engelska", "matematik", "svenska"]
        );
    }

    #[test]
    fn test_index_key_shapes() {
        let html = listing_page(&[
            "https://example.com/foo/bar/",
            "https://example.com/baz/qux",
        ]);
        let fetcher = StubFetcher::new().with_page(LISTING, &html);

        let table = LinkIndexer::new(&fetcher).index(LISTING).unwrap();

        assert_eq!(table.get("bar").unwrap(), "https://example.com/foo/bar/");
        assert_eq!(table.get("baz").unwrap(), "https://example.com/baz/qux");
        assert!(!table.contains("qux"));
    }

    #[test]
    fn test_index_ignores_anchors_outside_cards() {
        let html = format!(
            r#"{}<nav><a href="/om-oss/kontakt/">Kontakt</a></nav>
            <div class="wpgb-card-media-content-bottom"><span><a href="/kurser/nested/">x</a></span></div>
            <div class="wpgb-card-media-content-bottom"><a>no href</a></div>"#,
            listing_page(&["/kurser/svenska/"])
        );
        let fetcher = StubFetcher::new().with_page(LISTING, &html);

        let table = LinkIndexer::new(&fetcher).index(LISTING).unwrap();

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["svenska"]);
        assert_eq!(table.get("svenska").unwrap(), "https://example.com/kurser/svenska/");
    }

    #[test]
    fn test_duplicate_key_keeps_first_in_document() {
        let html = listing_page(&[
            "https://example.com/kurser/ekonomi/",
            "https://example.com/utbildningar/ekonomi/",
        ]);
        let fetcher = StubFetcher::new().with_page(LISTING, &html);

        let table = LinkIndexer::new(&fetcher).index(LISTING).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("ekonomi").unwrap(),
            "https://example.com/kurser/ekonomi/"
        );
    }

    #[test]
    fn test_index_propagates_fetch_error() {
        let fetcher = StubFetcher::new();
        let err = LinkIndexer::new(&fetcher).index(LISTING).unwrap_err();
        assert!(err.is_fetch());
    }

    #[test]
    fn test_index_rejects_invalid_url() {
        let fetcher = StubFetcher::new();
        let err = LinkIndexer::new(&fetcher).index("kurser").unwrap_err();
        assert!(err.is_parse());
        assert!(fetcher.requests().is_empty());
    }
}
