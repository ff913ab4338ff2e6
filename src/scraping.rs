//! HTML extraction engine for MLS listing pages.
//!
//! Trait-based extraction over a `scraper` document tree: a locator finds
//! the listing blocks, two block extractors recover unit fields and the
//! room sub-table, and the engine aggregates results with per-listing
//! failure isolation.

pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod locator;
pub mod rooms;

pub use config::ScrapeConfig;
pub use engine::ScrapeEngine;
pub use error::{ScrapeError, ScrapeResult};
pub use fields::FieldExtractor;
pub use locator::{ListingBlock, ListingLocator};
pub use rooms::RoomTableExtractor;

use scraper::{ElementRef, Selector};

/// Extractor over one listing block subtree.
pub trait BlockExtractor {
    type Output;

    /// Extract this extractor's output from a listing block.
    ///
    /// A violated structural assumption is an error for this listing only;
    /// the caller decides whether the batch continues.
    fn extract(&self, block: ElementRef<'_>) -> ScrapeResult<Self::Output>;
}

/// Zip ordered values against a fixed label list by position, truncating
/// to the shorter side.
///
/// The page communicates field meaning only through position, so both the
/// address and the room extractor decode values with this one utility:
/// fewer values than labels assigns only the available prefix, extra
/// values are dropped.
pub fn zip_positional<'a, I>(labels: &'a [String], values: I) -> impl Iterator<Item = (&'a str, String)> + 'a
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    labels.iter().map(String::as_str).zip(values)
}

/// Compile a CSS selector string, surfacing the failure as a config error.
pub(crate) fn compile_selector(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::invalid_pattern(selector, &e.to_string()))
}

/// Collected, whitespace-trimmed text content of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zip_truncates_to_fewer_values() {
        let labels = labels(&["A", "B", "C"]);
        let pairs: Vec<_> = zip_positional(&labels, vec!["1".to_string()]).collect();
        assert_eq!(pairs, vec![("A", "1".to_string())]);
    }

    #[test]
    fn zip_truncates_to_fewer_labels() {
        let labels = labels(&["A"]);
        let values = vec!["1".to_string(), "2".to_string()];
        let pairs: Vec<_> = zip_positional(&labels, values).collect();
        assert_eq!(pairs, vec![("A", "1".to_string())]);
    }

    #[test]
    fn invalid_selector_is_reported() {
        let err = compile_selector("div[").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPattern { .. }));
    }
}
