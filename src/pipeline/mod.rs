//! Pipeline entry points.
//!
//! - `run_export`: scrape the fixed pages (and optionally every subject) and
//!   write them through an `Exporter`

pub mod export;

pub use export::{ExportSummary, run_export, subject_filename};
