//! Command-line surface: argument parsing and the console view.
//!
//! The view owns all human-readable narration. It wraps each engine call
//! from the outside, inspecting returned results; the engine itself never
//! prints.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::ScrapeStatus;
use crate::scraping::ScrapeError;

/// Convert a saved MLS rental listing page into unit and room attribute
/// datasets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Input file path of the saved MLS html page
    pub input: std::path::PathBuf,

    /// Output directory for the scraped datasets
    pub output: std::path::PathBuf,

    /// Save as csv format (default)
    #[arg(short = 't', long = "tabular", conflicts_with = "non_tabular")]
    pub tabular: bool,

    /// Save as json format
    #[arg(short = 'n', long = "non-tabular")]
    pub non_tabular: bool,
}

impl Args {
    /// The effective output shape; tabular unless `--non-tabular` was
    /// given.
    pub fn as_tabular(&self) -> bool {
        !self.non_tabular
    }
}

/// Initialize console diagnostics; narration goes to stdout separately.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();
}

/// Console narration around the engine calls.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    /// Heading and resolved parameters.
    pub fn initialization(&self, args: &Args) {
        println!("===========");
        println!("MLS Scraper");
        println!("===========");
        println!();
        println!("Initializing...");
        println!("Input file path: {}", args.input.display());
        println!("Output directory: {}", args.output.display());
        println!("Output as tabular format: {}", args.as_tabular());
        println!();
    }

    pub fn missing_path(&self, path: &Path) {
        eprintln!("Error: {} does not exist", path.display());
        eprintln!("Please check if the path is correct");
    }

    pub fn reading(&self, path: &Path) {
        println!("Reading MLS page from {}...", path.display());
    }

    pub fn loaded(&self) {
        println!("MLS page loaded successfully");
        println!();
    }

    pub fn load_failed(&self, err: &ScrapeError) {
        eprintln!("Could not load the MLS page: {err}");
        eprintln!("Please check that the input is a valid saved page");
    }

    pub fn scraping(&self) {
        println!("Scraping rental information from the page...");
    }

    pub fn scraped(&self) {
        println!("Rental information collected");
        println!();
    }

    /// Success/failure summary, listing the failed MLS numbers.
    pub fn summary(&self, status: &ScrapeStatus) {
        println!("Summary:");
        println!("Succeeded: {}", status.success.len());
        println!("Failed: {}", status.failure.len());
        if !status.failure.is_empty() {
            println!("Failed MLS numbers: {}", status.failure.join(", "));
        }
        println!();
    }

    pub fn writing(&self, directory: &Path) {
        println!("Writing rental information to {}...", directory.display());
    }

    pub fn written(&self) {
        println!("Unit and room attributes were saved");
        println!();
    }

    pub fn write_failed(&self, err: &ScrapeError) {
        eprintln!("Could not write the output: {err}");
        eprintln!("Please check the output directory");
    }

    pub fn ending(&self) {
        println!("MLS page information was collected");
        println!("Feel free to browse the output with spreadsheet software");
    }
}
