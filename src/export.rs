//! Output serialization: nested JSON or flat CSV datasets.

pub mod table;

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::domain::{ListingCollection, RoomTable, UnitAttributes};
use crate::scraping::{ScrapeError, ScrapeResult};

pub use table::{DataTable, LISTING_ID_COLUMN, ROOM_INDEX_COLUMN};

/// Base name of the unit attribute dataset file.
pub const UNIT_ATTRS_DATASET: &str = "unit_attrs";

/// Base name of the room attribute dataset file.
pub const ROOMS_DATASET: &str = "rooms";

/// The two datasets of a completed run in one of the two output shapes.
///
/// Both shapes of the same collection hold identical data; only the
/// arrangement differs.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutput {
    /// The nested mappings as built by the run, serialized as JSON.
    Nested {
        unit_attrs: IndexMap<String, UnitAttributes>,
        rooms: IndexMap<String, RoomTable>,
    },
    /// Flattened tables, serialized as CSV.
    Tabular {
        unit_attrs: DataTable,
        rooms: DataTable,
    },
}

impl ScrapeOutput {
    /// Build the requested shape from a completed collection. A pure read;
    /// the collection is not consumed or cached.
    pub fn from_collection(collection: &ListingCollection, tabular: bool) -> Self {
        if tabular {
            Self::Tabular {
                unit_attrs: DataTable::from_unit_attrs(collection),
                rooms: DataTable::from_rooms(collection),
            }
        } else {
            Self::Nested {
                unit_attrs: collection.unit_attrs.clone(),
                rooms: collection.rooms.clone(),
            }
        }
    }

    /// Write the two dataset files into `directory`, named by the fixed
    /// dataset base names with the shape's extension.
    pub fn write_to(&self, directory: &Path) -> ScrapeResult<()> {
        match self {
            Self::Nested { unit_attrs, rooms } => {
                write_json(&directory.join(format!("{UNIT_ATTRS_DATASET}.json")), unit_attrs)?;
                write_json(&directory.join(format!("{ROOMS_DATASET}.json")), rooms)?;
            }
            Self::Tabular { unit_attrs, rooms } => {
                unit_attrs.write_csv(&directory.join(format!("{UNIT_ATTRS_DATASET}.csv")))?;
                rooms.write_csv(&directory.join(format!("{ROOMS_DATASET}.csv")))?;
            }
        }
        debug!("wrote datasets into {}", directory.display());
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ScrapeResult<()> {
    let file =
        File::create(path).map_err(|e| ScrapeError::output_write_failure(path, &e.to_string()))?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| ScrapeError::output_write_failure(path, &e.to_string()))
}
