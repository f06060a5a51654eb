// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;
use crate::utils::html::HtmlDocument;

/// Source of raw page HTML.
pub trait PageFetcher {
    /// Fetch `url` and return the response body.
    fn fetch(&self, url: &str) -> Result<String>;

    /// Fetch `url` and parse it as an HTML document.
    fn fetch_document(&self, url: &str) -> Result<HtmlDocument> {
        let text = self.fetch(url)?;
        Ok(HtmlDocument::parse(&text))
    }
}

/// Create a configured blocking HTTP client.
///
/// Idle connections are not pooled; every request opens its own connection.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}

/// `PageFetcher` backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with a client configured from `config`.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| AppError::fetch(url, e))
    }
}
