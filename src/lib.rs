//! MLS Scraper - rental listing page extraction
//!
//! This crate converts one saved MLS real-estate listing page into two
//! normalized datasets keyed by MLS number: per-unit attributes and
//! per-room attributes. The page carries no semantic tagging, so the
//! extraction engine works from structural markers (class prefixes) and
//! sibling/positional order, tolerating malformed listings without
//! aborting the batch.

pub mod cli;
pub mod domain;
pub mod export;
pub mod scraping;

pub use scraping::{ScrapeConfig, ScrapeEngine, ScrapeError, ScrapeResult};
