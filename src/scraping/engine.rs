//! Scrape engine: aggregation over all listing blocks plus serialization.
//!
//! One engine value holds one loaded document and the state of the last
//! run. Extraction failures are isolated per listing - a malformed block
//! lands in the failure set and the run continues; only input/output
//! problems surface as errors to the caller.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::config::ScrapeConfig;
use super::fields::FieldExtractor;
use super::locator::ListingLocator;
use super::rooms::RoomTableExtractor;
use super::{BlockExtractor, ScrapeError, ScrapeResult};
use crate::domain::{ListingCollection, RoomTable, ScrapeStatus, UnitAttributes};
use crate::export::ScrapeOutput;

/// The extraction engine over one MLS listing page.
pub struct ScrapeEngine {
    locator: ListingLocator,
    fields: FieldExtractor,
    rooms: RoomTableExtractor,
    document: Option<Html>,
    collection: ListingCollection,
    status: ScrapeStatus,
}

impl ScrapeEngine {
    /// Create an engine for the default MLS page shape.
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&ScrapeConfig::default())
    }

    /// Create an engine with custom structural markers. Fails fast on a
    /// pattern that does not compile.
    pub fn with_config(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Ok(Self {
            locator: ListingLocator::with_config(config)?,
            fields: FieldExtractor::with_config(config)?,
            rooms: RoomTableExtractor::with_config(config)?,
            document: None,
            collection: ListingCollection::default(),
            status: ScrapeStatus::default(),
        })
    }

    /// Read and parse the listing page, replacing any previous document
    /// and clearing run state. Undecodable bytes are replaced, not fatal.
    pub fn load(&mut self, path: &Path) -> ScrapeResult<()> {
        let bytes =
            fs::read(path).map_err(|e| ScrapeError::input_not_found(path, &e.to_string()))?;
        let raw = String::from_utf8_lossy(&bytes);

        self.document = Some(Html::parse_document(&raw));
        self.collection = ListingCollection::default();
        self.status = ScrapeStatus::default();

        debug!("loaded document from {}", path.display());
        Ok(())
    }

    /// Parse an already-loaded HTML string instead of a file.
    pub fn load_str(&mut self, html: &str) {
        self.document = Some(Html::parse_document(html));
        self.collection = ListingCollection::default();
        self.status = ScrapeStatus::default();
    }

    /// Extract every listing in document order.
    ///
    /// Rebuilds the collection and status from scratch, so re-running on
    /// the same document yields identical results. Each listing either has
    /// both its attribute map and room table recorded, or neither.
    pub fn extract_all(&mut self) -> ScrapeResult<&ScrapeStatus> {
        let document = self.document.as_ref().ok_or(ScrapeError::DocumentNotLoaded)?;

        let mut collection = ListingCollection::default();
        let mut status = ScrapeStatus::default();

        for block in self.locator.locate(document) {
            match self.extract_listing(block.root) {
                Ok((attrs, rooms)) => {
                    collection.unit_attrs.insert(block.id.clone(), attrs);
                    collection.rooms.insert(block.id.clone(), rooms);
                    status.success.push(block.id);
                }
                Err(err) => {
                    warn!("listing {} failed extraction: {}", block.id, err);
                    status.failure.push(block.id);
                }
            }
        }

        debug!(
            "run complete: {} succeeded, {} failed",
            status.success.len(),
            status.failure.len()
        );

        self.collection = collection;
        self.status = status;
        Ok(&self.status)
    }

    fn extract_listing(
        &self,
        block: ElementRef<'_>,
    ) -> ScrapeResult<(UnitAttributes, RoomTable)> {
        let attrs = self.fields.extract(block)?;
        let rooms = self.rooms.extract(block)?;
        Ok((attrs, rooms))
    }

    /// Status of the last run.
    pub fn status(&self) -> &ScrapeStatus {
        &self.status
    }

    /// Collection built by the last run.
    pub fn collection(&self) -> &ListingCollection {
        &self.collection
    }

    /// Serialize the last run's collection, nested or tabular, writing the
    /// two dataset files when a directory is given. The in-memory shape is
    /// returned either way; a write failure leaves it intact.
    pub fn export(&self, directory: Option<&Path>, tabular: bool) -> ScrapeResult<ScrapeOutput> {
        let output = ScrapeOutput::from_collection(&self.collection, tabular);
        if let Some(directory) = directory {
            output.write_to(directory)?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_creation() {
        assert!(ScrapeEngine::new().is_ok());
    }

    #[test]
    fn extract_before_load_is_an_error() {
        let mut engine = ScrapeEngine::new().unwrap();
        let err = engine.extract_all().unwrap_err();
        assert!(matches!(err, ScrapeError::DocumentNotLoaded));
    }

    #[test]
    fn load_of_missing_path_is_input_not_found() {
        let mut engine = ScrapeEngine::new().unwrap();
        let err = engine
            .load(Path::new("/nonexistent/mls_page.html"))
            .unwrap_err();
        assert!(matches!(err, ScrapeError::InputNotFound { .. }));
    }

    #[test]
    fn empty_document_yields_empty_run() {
        let mut engine = ScrapeEngine::new().unwrap();
        engine.load_str("<html><body><p>no listings</p></body></html>");
        let status = engine.extract_all().unwrap();
        assert_eq!(status.discovered(), 0);
        assert!(engine.collection().is_empty());
    }
}
