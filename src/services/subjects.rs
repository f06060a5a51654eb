// src/services/subjects.rs

//! Subject scraper.
//!
//! Indexes an education or course listing once, then resolves subject keys
//! to the descriptive text of their detail pages.

use crate::error::Result;
use crate::models::{Config, LinkTable, SubjectKind};
use crate::services::{LinkIndexer, TextExtractor};
use crate::utils::http::PageFetcher;

/// Description text on a subject detail page: text columns, paragraphs, and
/// bullet lists introduced by a heading.
pub const DETAIL_SELECTOR: &str = ".wpb_text_column span, p, h4 + ul li";

/// Resolves subject keys of one listing to their description text.
pub struct SubjectScraper<'a> {
    fetcher: &'a dyn PageFetcher,
    links: LinkTable,
    extractor: TextExtractor,
}

impl<'a> SubjectScraper<'a> {
    /// Index the listing at `listing_url` and build a scraper over it.
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        listing_url: &str,
        extractor: TextExtractor,
    ) -> Result<Self> {
        let links = LinkIndexer::new(fetcher).index(listing_url)?;
        Ok(Self {
            fetcher,
            links,
            extractor,
        })
    }

    /// Scraper for the configured listing of `kind`.
    pub fn for_kind(fetcher: &'a dyn PageFetcher, config: &Config, kind: SubjectKind) -> Result<Self> {
        let listing_url = config.site.listing_url(kind.listing(&config.site));
        log::debug!("Indexing {} listing at {}", kind, listing_url);
        Self::new(
            fetcher,
            &listing_url,
            TextExtractor::new(config.extraction.node_filter()),
        )
    }

    /// Scraper over the education programme listing.
    pub fn education(fetcher: &'a dyn PageFetcher, config: &Config) -> Result<Self> {
        Self::for_kind(fetcher, config, SubjectKind::Education)
    }

    /// Scraper over the course listing.
    pub fn course(fetcher: &'a dyn PageFetcher, config: &Config) -> Result<Self> {
        Self::for_kind(fetcher, config, SubjectKind::Course)
    }

    /// Fetch the detail page of `subject` and return its description.
    ///
    /// Fails with `AppError::UnknownSubject` without touching the network
    /// when the key is not in the listing.
    pub fn scrape(&self, subject: &str) -> Result<String> {
        let url = self.links.get(subject)?;
        let document = self.fetcher.fetch_document(url)?;
        self.extractor.extract_joined(&document, DETAIL_SELECTOR)
    }

    /// Known subject keys, sorted.
    pub fn subjects(&self) -> Vec<&str> {
        self.links.keys().collect()
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }
}
