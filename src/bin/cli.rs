//! NBI Scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nbi_scraper::{
    error::Result,
    models::{Config, SubjectKind},
    pipeline,
    services::{ApplicationScraper, FaqScraper, SubjectScraper},
    storage::{Exporter, LocalExporter},
    utils::http::HttpFetcher,
};

/// NBI Scraper - programme, course and application text from NBI Handelsakademin
#[derive(Parser, Debug)]
#[command(name = "nbi-scraper", version, about = "NBI Handelsakademin site scraper")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the subject keys of a listing
    Subjects {
        #[arg(value_enum)]
        kind: SubjectKind,
    },

    /// Print the description of one subject
    Subject {
        #[arg(value_enum)]
        kind: SubjectKind,

        /// Subject key as listed by `subjects`
        key: String,

        /// Also write the description to the output directory
        #[arg(long)]
        save: bool,
    },

    /// Print the application page fields
    Application {
        /// Also write the fields to the output directory
        #[arg(long)]
        save: bool,
    },

    /// Print the FAQ entries
    Faq {
        /// Also write the entries to the output directory
        #[arg(long)]
        save: bool,
    },

    /// Export the application and FAQ pages
    Export {
        /// Also export every education and course description
        #[arg(long)]
        subjects: bool,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_list(title: &str, items: &[String]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `validate` must not mask a broken file with defaults
    let loaded = match cli.command {
        Command::Validate => Config::load_validated(&cli.config),
        _ => Ok(Config::load_or_default(&cli.config)),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed from {}: {}", cli.config.display(), e);
            return Err(e);
        }
    };
    if let Some(dir) = &cli.output {
        config.output.dir = dir.display().to_string();
    }
    log::debug!("Loaded configuration from {}", cli.config.display());

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let fetcher = HttpFetcher::from_config(&config.http)?;
    let exporter = LocalExporter::new(config.output.dir_path());

    match cli.command {
        Command::Subjects { kind } => {
            let scraper = SubjectScraper::for_kind(&fetcher, &config, kind)?;
            for (key, url) in scraper.links().iter() {
                println!("{key}\t{url}");
            }
        }

        Command::Subject { kind, key, save } => {
            let scraper = SubjectScraper::for_kind(&fetcher, &config, kind)?;
            let text = scraper.scrape(&key)?;
            println!("{text}");

            if save {
                let filename = pipeline::subject_filename(kind, &key);
                exporter.write(&filename, &text)?;
                log::info!("Saved {}", exporter.root_dir().join(filename).display());
            }
        }

        Command::Application { save } => {
            let info = ApplicationScraper::new(&fetcher, &config)?.collect()?;
            println!("{}\n", info.description);
            print_list("Time plan", &info.time_plan);
            print_list("Available educations", &info.available_educations);
            print_list("Application steps", &info.application_steps);

            if save {
                exporter.write("application_description.txt", &info.description)?;
                exporter.write_json("application_time_plan.json", &info.time_plan)?;
                exporter.write_json(
                    "application_available_educations.json",
                    &info.available_educations,
                )?;
                exporter.write_json("application_steps.json", &info.application_steps)?;
                log::info!("Saved application fields to {}", exporter.root_dir().display());
            }
        }

        Command::Faq { save } => {
            let faq = FaqScraper::new(&fetcher, &config)?.faq()?;
            print_list("FAQ", &faq);

            if save {
                exporter.write_json("faq.json", &faq)?;
                log::info!("Saved FAQ to {}", exporter.root_dir().display());
            }
        }

        Command::Export { subjects } => {
            let summary = pipeline::run_export(&config, &fetcher, &exporter, subjects)?;
            log::info!(
                "Export complete: {} file(s), {} subject(s) in {}",
                summary.files.len(),
                summary.subject_count,
                exporter.root_dir().display()
            );
        }

        Command::Validate => {
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    Ok(())
}
