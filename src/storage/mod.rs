//! Export of scraped text to persistent storage.
//!
//! ## Directory Structure
//!
//! ```text
//! {output_dir}/
//! ├── application_description.txt
//! ├── application_time_plan.json
//! ├── application_available_educations.json
//! ├── application_steps.json
//! ├── faq.json
//! └── course_matematik.txt      # one file per exported subject
//! ```

pub mod local;

use serde::Serialize;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalExporter;

/// Trait for export backends.
pub trait Exporter {
    /// Write `content` to `filename`, replacing any previous content.
    fn write(&self, filename: &str, content: &str) -> Result<()>;

    /// Write a value as pretty-printed JSON.
    fn write_json<T: Serialize + ?Sized>(&self, filename: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string_pretty(value)?;
        self.write(filename, &json)
    }
}
