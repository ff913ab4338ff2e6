//! Listing data structures.
//!
//! All maps are insertion ordered (`IndexMap`): listings appear in document
//! order and attribute labels in first-seen order, and both orderings are
//! carried through to serialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label -> text mapping of non-room attributes for one listing.
///
/// Built by merging address fields, generic attribute tables and remarks;
/// a later merge overwrites an earlier value on label collision.
pub type UnitAttributes = IndexMap<String, String>;

/// Label -> text mapping for one room.
pub type RoomAttributes = IndexMap<String, String>;

/// Room index -> room attributes for one listing's rooms.
///
/// The room index key is taken verbatim from the page and is not
/// necessarily numeric-sorted.
pub type RoomTable = IndexMap<String, RoomAttributes>;

/// The two parallel datasets of a completed run, both keyed by MLS number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingCollection {
    /// Unit attributes per listing.
    pub unit_attrs: IndexMap<String, UnitAttributes>,
    /// Room table per listing.
    pub rooms: IndexMap<String, RoomTable>,
}

impl ListingCollection {
    /// True if no listing was recorded.
    pub fn is_empty(&self) -> bool {
        self.unit_attrs.is_empty() && self.rooms.is_empty()
    }
}

/// Partition of all discovered MLS numbers into succeeded and failed
/// listings, in discovery order.
///
/// The two lists are disjoint and their union covers every discovered
/// listing; an id in `success` has entries in both collection maps, an id
/// in `failure` has entries in neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeStatus {
    /// MLS numbers that were fully extracted.
    pub success: Vec<String>,
    /// MLS numbers whose extraction failed.
    pub failure: Vec<String>,
}

impl ScrapeStatus {
    /// Total number of listings discovered in the document.
    pub fn discovered(&self) -> usize {
        self.success.len() + self.failure.len()
    }

    /// Whether the given MLS number was extracted successfully.
    pub fn is_success(&self, id: &str) -> bool {
        self.success.iter().any(|s| s == id)
    }
}
