//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::NodeFilter;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Target site layout
    #[serde(default)]
    pub site: SiteConfig,

    /// Text extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Export destination
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load configuration from a TOML file and validate it, without falling
    /// back to defaults.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }

        let base = Url::parse(&self.site.base_url)
            .map_err(|e| AppError::validation(format!("site.base_url is invalid: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation("site.base_url must be http(s)"));
        }

        for (name, value) in [
            ("site.application_page", &self.site.application_page),
            ("site.faq_page", &self.site.faq_page),
            ("site.education.pathname", &self.site.education.pathname),
            ("site.course.pathname", &self.site.course.pathname),
        ] {
            if value.trim_matches('/').is_empty() {
                return Err(AppError::validation(format!("{name} is empty")));
            }
        }

        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Where the pages live on the target site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site root, without trailing path
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Pathname of the application page
    #[serde(default = "defaults::application_page")]
    pub application_page: String,

    /// Pathname of the FAQ page
    #[serde(default = "defaults::faq_page")]
    pub faq_page: String,

    /// Listing of education programmes
    #[serde(default = "defaults::education")]
    pub education: ListingConfig,

    /// Listing of single courses
    #[serde(default = "defaults::course")]
    pub course: ListingConfig,
}

impl SiteConfig {
    /// Absolute URL of a fixed page such as `ansokan`.
    pub fn page_url(&self, pathname: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            pathname.trim_start_matches('/')
        )
    }

    /// Absolute URL of a listing page, including its query suffix.
    pub fn listing_url(&self, listing: &ListingConfig) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            listing.pathname.trim_matches('/'),
            listing.query.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            application_page: defaults::application_page(),
            faq_page: defaults::faq_page(),
            education: defaults::education(),
            course: defaults::course(),
        }
    }
}

/// A listing page of subject cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingConfig {
    /// Path below the site root (e.g. `kurser`)
    pub pathname: String,

    /// Query suffix appended after the pathname (e.g. `?_programkurser=program`)
    #[serde(default)]
    pub query: String,
}

/// Text extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Nodes containing this marker are dropped from subject descriptions.
    /// An empty string disables the filter.
    #[serde(default = "defaults::skip_marker")]
    pub skip_marker: String,
}

impl ExtractionConfig {
    pub fn node_filter(&self) -> NodeFilter {
        NodeFilter::from_marker(&self.skip_marker)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skip_marker: defaults::skip_marker(),
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory exported files are written to
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl OutputConfig {
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

mod defaults {
    use super::ListingConfig;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; nbi-scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://www.nbi-handelsakademin.se".into()
    }
    pub fn application_page() -> String {
        "ansokan".into()
    }
    pub fn faq_page() -> String {
        "faq".into()
    }
    pub fn education() -> ListingConfig {
        ListingConfig {
            pathname: "utbildningar".into(),
            query: "?_programkurser=program".into(),
        }
    }
    pub fn course() -> ListingConfig {
        ListingConfig {
            pathname: "kurser".into(),
            query: String::new(),
        }
    }

    // Extraction defaults
    pub fn skip_marker() -> String {
        crate::models::filter::NBSP.into()
    }

    // Output defaults
    pub fn output_dir() -> String {
        "data/output".into()
    }
}
