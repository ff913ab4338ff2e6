//! Flat tabular form of the scraped datasets.

use std::path::Path;

use serde::Serialize;

use crate::domain::ListingCollection;
use crate::scraping::{ScrapeError, ScrapeResult};

/// First column of both tables: the listing identifier.
pub const LISTING_ID_COLUMN: &str = "MLS Number";

/// Second column of the room table: the room's index within its listing.
pub const ROOM_INDEX_COLUMN: &str = "Room Index";

/// A flat table: header row plus data rows, cells as text.
///
/// Columns start with the listing id (and room index for the room table)
/// followed by attribute labels in first-seen order; a listing without a
/// given label gets an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Flatten unit attributes: one row per listing.
    pub fn from_unit_attrs(collection: &ListingCollection) -> Self {
        let mut columns = vec![LISTING_ID_COLUMN.to_string()];
        for attrs in collection.unit_attrs.values() {
            for label in attrs.keys() {
                if !columns.contains(label) {
                    columns.push(label.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(collection.unit_attrs.len());
        for (id, attrs) in &collection.unit_attrs {
            let mut row = Vec::with_capacity(columns.len());
            row.push(id.clone());
            for label in &columns[1..] {
                row.push(attrs.get(label).cloned().unwrap_or_default());
            }
            rows.push(row);
        }

        Self { columns, rows }
    }

    /// Flatten the two-level room mapping: one row per (listing, room),
    /// with the room index as an explicit column.
    pub fn from_rooms(collection: &ListingCollection) -> Self {
        let mut columns = vec![LISTING_ID_COLUMN.to_string(), ROOM_INDEX_COLUMN.to_string()];
        for table in collection.rooms.values() {
            for room in table.values() {
                for label in room.keys() {
                    if !columns.contains(label) {
                        columns.push(label.clone());
                    }
                }
            }
        }

        let mut rows = Vec::new();
        for (id, table) in &collection.rooms {
            for (index, room) in table {
                let mut row = Vec::with_capacity(columns.len());
                row.push(id.clone());
                row.push(index.clone());
                for label in &columns[2..] {
                    row.push(room.get(label).cloned().unwrap_or_default());
                }
                rows.push(row);
            }
        }

        Self { columns, rows }
    }

    /// Write the table as CSV, header first.
    pub fn write_csv(&self, path: &Path) -> ScrapeResult<()> {
        let to_err = |e: csv::Error| ScrapeError::output_write_failure(path, &e.to_string());

        let mut writer = csv::Writer::from_path(path).map_err(to_err)?;
        writer.write_record(&self.columns).map_err(to_err)?;
        for row in &self.rows {
            writer.write_record(row).map_err(to_err)?;
        }
        writer
            .flush()
            .map_err(|e| ScrapeError::output_write_failure(path, &e.to_string()))
    }
}
