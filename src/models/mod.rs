// src/models/mod.rs

//! Domain models for the scraper.
//!
//! Configuration, the listing link table, and the small value types shared
//! by the services.

pub mod config;
mod filter;
mod links;
mod subject;

// Re-export all public types
pub use config::{Config, ExtractionConfig, HttpConfig, ListingConfig, OutputConfig, SiteConfig};
pub use filter::NodeFilter;
pub use links::LinkTable;
pub use subject::SubjectKind;
