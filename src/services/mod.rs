//! Service layer for the scraper.
//!
//! This module contains the scraping logic:
//! - Listing link indexing (`LinkIndexer`)
//! - Selector-based text extraction (`TextExtractor`)
//! - Subject lookup on education/course listings (`SubjectScraper`)
//! - Fixed pages: application and FAQ (`ApplicationScraper`, `FaqScraper`)

mod links;
mod pages;
mod subjects;
mod text;

pub use links::{CARD_LINK_SELECTOR, LinkIndexer};
pub use pages::{ApplicationInfo, ApplicationScraper, FaqScraper, PageScraper};
pub use subjects::{DETAIL_SELECTOR, SubjectScraper};
pub use text::TextExtractor;
