// src/utils/html.rs

//! Parsed HTML documents and selector helpers.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures into `AppError::Selector`.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Text content of an element: all descendant text nodes concatenated.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. The HTML5 parser recovers from any input,
    /// so this never fails.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }

    /// Text of every element matching the CSS selector `css`, in document order.
    pub fn select_texts(&self, css: &str) -> Result<Vec<String>> {
        let selector = parse_selector(css)?;
        Ok(self.select(&selector).map(element_text).collect())
    }

    /// Value of `attr` on every element matching `css` that carries it.
    pub fn select_attrs(&self, css: &str, attr: &str) -> Result<Vec<String>> {
        let selector = parse_selector(css)?;
        Ok(self
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector(".wpb_text_column span, p, h4 + ul li").is_ok());
        assert!(parse_selector("h1, h1 ~ *").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(matches!(
            parse_selector("[[invalid"),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn test_select_texts_nested() {
        let doc = HtmlDocument::parse("<ul><li>One <b>bold</b></li><li>Two</li></ul>");
        assert_eq!(doc.select_texts("li").unwrap(), vec!["One bold", "Two"]);
    }

    #[test]
    fn test_select_attrs_skips_missing() {
        let doc = HtmlDocument::parse(r#"<a href="/a/">A</a><a>B</a>"#);
        assert_eq!(doc.select_attrs("a", "href").unwrap(), vec!["/a/"]);
    }
}
