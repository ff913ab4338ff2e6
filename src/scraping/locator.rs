//! Record locator: finds the listing blocks of the document.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::config::ScrapeConfig;
use super::{compile_selector, ScrapeResult};

/// One listing block: the MLS number and the subtree rooted at its
/// container element.
#[derive(Debug, Clone)]
pub struct ListingBlock<'a> {
    /// MLS number, taken verbatim from the container's id attribute.
    pub id: String,
    /// Root of the listing subtree.
    pub root: ElementRef<'a>,
}

/// Finds listing blocks by their structural class-prefix marker.
pub struct ListingLocator {
    listing_block: Selector,
    id_attribute: String,
}

impl ListingLocator {
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&ScrapeConfig::default())
    }

    pub fn with_config(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Ok(Self {
            listing_block: compile_selector(&config.listing_block)?,
            id_attribute: config.id_attribute.clone(),
        })
    }

    /// All listing blocks in document order.
    ///
    /// The identifier attribute is part of the structural marker: a
    /// container matching the class prefix but carrying no id is not a
    /// listing and is skipped. No match yields an empty list, not an
    /// error.
    pub fn locate<'a>(&self, document: &'a Html) -> Vec<ListingBlock<'a>> {
        let mut blocks = Vec::new();

        for element in document.select(&self.listing_block) {
            match element.value().attr(&self.id_attribute) {
                Some(id) => blocks.push(ListingBlock {
                    id: id.to_string(),
                    root: element,
                }),
                None => {
                    debug!(
                        "skipping listing container without '{}' attribute",
                        self.id_attribute
                    );
                }
            }
        }

        debug!("located {} listing blocks", blocks.len());
        blocks
    }
}
