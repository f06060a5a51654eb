// src/services/text.rs

//! Selector-based text extraction.

use crate::error::Result;
use crate::models::NodeFilter;
use crate::utils::html::{HtmlDocument, element_text, parse_selector};

/// Extracts node text from a document, either joined or as a list.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    filter: NodeFilter,
}

impl TextExtractor {
    /// Create an extractor that applies `filter` to joined extraction.
    pub fn new(filter: NodeFilter) -> Self {
        Self { filter }
    }

    /// Extractor that keeps every node.
    pub fn unfiltered() -> Self {
        Self::new(NodeFilter::KeepAll)
    }

    /// Text of every accepted node matching `selector`, joined by one space.
    ///
    /// Returns an empty string when nothing matches or every node is filtered.
    pub fn extract_joined(&self, document: &HtmlDocument, selector: &str) -> Result<String> {
        let selector = parse_selector(selector)?;
        let texts: Vec<String> = document
            .select(&selector)
            .map(element_text)
            .filter(|text| self.filter.accepts(text))
            .collect();
        Ok(texts.join(" "))
    }

    /// Text of every node matching `selector`, in document order, unfiltered.
    pub fn extract_list(&self, document: &HtmlDocument, selector: &str) -> Result<Vec<String>> {
        document.select_texts(selector)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(NodeFilter::skip_nbsp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> HtmlDocument {
        HtmlDocument::parse(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn test_joined_drops_nbsp_nodes() {
        let document = doc("<p>Hello\u{a0}World</p><p>Plain</p>");
        let text = TextExtractor::default()
            .extract_joined(&document, "p")
            .unwrap();
        assert_eq!(text, "Plain");
    }

    #[test]
    fn test_joined_drops_entity_nbsp() {
        let document = doc("<p>&nbsp;</p><p>Ett</p><p>Två</p>");
        let text = TextExtractor::default()
            .extract_joined(&document, "p")
            .unwrap();
        assert_eq!(text, "Ett Två");
    }

    #[test]
    fn test_joined_all_filtered_is_empty() {
        let document = doc("<p>a\u{a0}b</p><p>\u{a0}</p>");
        let text = TextExtractor::default()
            .extract_joined(&document, "p")
            .unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_joined_unfiltered_keeps_everything() {
        let document = doc("<p>Hello\u{a0}World</p><p>Plain</p>");
        let text = TextExtractor::unfiltered()
            .extract_joined(&document, "p")
            .unwrap();
        assert_eq!(text, "Hello\u{a0}World Plain");
    }

    #[test]
    fn test_list_keeps_order_and_nbsp() {
        let document = doc("<ul><li>Första</li><li>Andra\u{a0}steg</li><li>Tredje</li></ul>");
        let items = TextExtractor::default()
            .extract_list(&document, "li")
            .unwrap();
        assert_eq!(items, vec!["Första", "Andra\u{a0}steg", "Tredje"]);
    }

    #[test]
    fn test_invalid_selector() {
        let document = doc("<p>x</p>");
        assert!(
            TextExtractor::default()
                .extract_joined(&document, "[[")
                .unwrap_err()
                .is_parse()
        );
    }
}
