// src/services/pages.rs

//! Fixed-page scrapers.
//!
//! Each page is fetched once when the scraper is built; accessors are plain
//! selector queries against the owned document.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Config;
use crate::services::TextExtractor;
use crate::utils::html::HtmlDocument;
use crate::utils::http::PageFetcher;

mod selectors {
    pub const DESCRIPTION: &str = "h1, h1 ~ *";
    pub const TIME_PLAN: &str = "#tab-tidplan ul li, #tab-tidplan ul + p";
    pub const AVAILABLE_EDUCATIONS: &str = "#tab-ansok li";
    pub const APPLICATION_STEPS: &str = "h3 a";
    pub const FAQ: &str = ".toggle.default a, .toggle.default p";
}

/// A single fetched page with text accessors.
pub struct PageScraper {
    document: HtmlDocument,
    extractor: TextExtractor,
}

impl PageScraper {
    /// Fetch `url` and keep the parsed document.
    pub fn fetch(fetcher: &dyn PageFetcher, url: &str) -> Result<Self> {
        let document = fetcher.fetch_document(url)?;
        Ok(Self::from_document(document))
    }

    /// Wrap an already parsed document. Joined text keeps every node.
    pub fn from_document(document: HtmlDocument) -> Self {
        Self {
            document,
            extractor: TextExtractor::unfiltered(),
        }
    }

    pub fn extract_text(&self, selector: &str) -> Result<String> {
        self.extractor.extract_joined(&self.document, selector)
    }

    pub fn extract_list(&self, selector: &str) -> Result<Vec<String>> {
        self.extractor.extract_list(&self.document, selector)
    }
}

/// Everything the application page exposes, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub description: String,
    pub time_plan: Vec<String>,
    pub available_educations: Vec<String>,
    pub application_steps: Vec<String>,
}

/// Scraper for the application (`ansokan`) page.
pub struct ApplicationScraper {
    page: PageScraper,
}

impl ApplicationScraper {
    /// Fetch the configured application page.
    pub fn new(fetcher: &dyn PageFetcher, config: &Config) -> Result<Self> {
        Self::from_url(fetcher, &config.site.page_url(&config.site.application_page))
    }

    pub fn from_url(fetcher: &dyn PageFetcher, url: &str) -> Result<Self> {
        Ok(Self {
            page: PageScraper::fetch(fetcher, url)?,
        })
    }

    /// Page heading and everything following it.
    pub fn description(&self) -> Result<String> {
        self.page.extract_text(selectors::DESCRIPTION)
    }

    /// Dates and notes from the timeline tab.
    pub fn time_plan(&self) -> Result<Vec<String>> {
        self.page.extract_list(selectors::TIME_PLAN)
    }

    /// Educations currently open for application.
    pub fn available_educations(&self) -> Result<Vec<String>> {
        self.page.extract_list(selectors::AVAILABLE_EDUCATIONS)
    }

    /// Titles of the application steps.
    pub fn application_steps(&self) -> Result<Vec<String>> {
        self.page.extract_list(selectors::APPLICATION_STEPS)
    }

    /// All fields at once.
    pub fn collect(&self) -> Result<ApplicationInfo> {
        Ok(ApplicationInfo {
            description: self.description()?,
            time_plan: self.time_plan()?,
            available_educations: self.available_educations()?,
            application_steps: self.application_steps()?,
        })
    }
}

/// Scraper for the FAQ page.
pub struct FaqScraper {
    page: PageScraper,
}

impl FaqScraper {
    /// Fetch the configured FAQ page.
    pub fn new(fetcher: &dyn PageFetcher, config: &Config) -> Result<Self> {
        Self::from_url(fetcher, &config.site.page_url(&config.site.faq_page))
    }

    pub fn from_url(fetcher: &dyn PageFetcher, url: &str) -> Result<Self> {
        Ok(Self {
            page: PageScraper::fetch(fetcher, url)?,
        })
    }

    /// Questions and answers, interleaved in page order.
    pub fn faq(&self) -> Result<Vec<String>> {
        self.page.extract_list(selectors::FAQ)
    }
}
