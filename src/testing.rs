//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::utils::http::PageFetcher;

/// In-memory `PageFetcher` that serves canned pages and records requests.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// URLs fetched so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::fetch(url, "404 Not Found"))
    }
}

/// A listing page with one card per href.
pub fn listing_page(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="wpgb-card"><div class="wpgb-card-media-content-bottom"><a href="{href}">Läs mer</a></div></div>"#
            )
        })
        .collect();
    format!("<html><body><main>{cards}</main></body></html>")
}
