// src/pipeline/export.rs

//! Export pipeline.

use crate::error::Result;
use crate::models::{Config, SubjectKind};
use crate::services::{ApplicationScraper, FaqScraper, SubjectScraper};
use crate::storage::Exporter;
use crate::utils::http::PageFetcher;

/// Summary of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// File names written, in write order
    pub files: Vec<String>,
    /// Number of subject descriptions exported
    pub subject_count: usize,
}

impl ExportSummary {
    fn push(&mut self, filename: &str) {
        self.files.push(filename.to_string());
    }
}

/// File name a subject description is exported under.
pub fn subject_filename(kind: SubjectKind, key: &str) -> String {
    format!("{kind}_{key}.txt")
}

/// Scrape the application and FAQ pages, and every subject of every listing
/// when `include_subjects` is set, writing each result through `exporter`.
///
/// The first failure aborts the run.
pub fn run_export<E: Exporter>(
    config: &Config,
    fetcher: &dyn PageFetcher,
    exporter: &E,
    include_subjects: bool,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    log::info!("Scraping application page...");
    let application = ApplicationScraper::new(fetcher, config)?.collect()?;

    exporter.write("application_description.txt", &application.description)?;
    summary.push("application_description.txt");
    for (filename, items) in [
        ("application_time_plan.json", &application.time_plan),
        (
            "application_available_educations.json",
            &application.available_educations,
        ),
        ("application_steps.json", &application.application_steps),
    ] {
        exporter.write_json(filename, items)?;
        summary.push(filename);
    }

    log::info!("Scraping FAQ page...");
    let faq = FaqScraper::new(fetcher, config)?.faq()?;
    exporter.write_json("faq.json", &faq)?;
    summary.push("faq.json");

    if include_subjects {
        for kind in SubjectKind::ALL {
            let scraper = SubjectScraper::for_kind(fetcher, config, kind)?;
            log::info!("Scraping {} {} subject(s)...", scraper.links().len(), kind);

            for key in scraper.subjects() {
                let text = scraper.scrape(key)?;
                let filename = subject_filename(kind, key);
                exporter.write(&filename, &text)?;
                summary.push(&filename);
                summary.subject_count += 1;
            }
        }
    }

    log::info!("Exported {} file(s)", summary.files.len());
    Ok(summary)
}
