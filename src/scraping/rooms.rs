//! Room table extractor: the ordered room sub-table of one listing block.
//!
//! The page marks no row as "room K"; only sibling order and a trailer row
//! communicate the table shape. The second-to-last horizontal row carries
//! the room count N, and the N rows directly above the trailer are the
//! rooms - the count row itself is the last row inside that window. The
//! windowing rule is a structural assumption of this page shape and is
//! preserved exactly.

use scraper::{ElementRef, Selector};
use tracing::debug;

use super::config::ScrapeConfig;
use super::{compile_selector, element_text, zip_positional, BlockExtractor, ScrapeError, ScrapeResult};
use crate::domain::{RoomAttributes, RoomTable};

/// Extracts the room table from one listing block.
pub struct RoomTableExtractor {
    room_row: Selector,
    value_span: Selector,
    room_labels: Vec<String>,
}

impl RoomTableExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&ScrapeConfig::default())
    }

    pub fn with_config(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Ok(Self {
            room_row: compile_selector(&config.room_row)?,
            value_span: compile_selector(&config.value_span)?,
            room_labels: config.room_labels.clone(),
        })
    }

    /// Room count N, read from the first value span of the second-to-last
    /// horizontal row.
    fn room_count(&self, rows: &[ElementRef<'_>]) -> ScrapeResult<usize> {
        let count_row = rows[rows.len() - 2];
        let text = count_row
            .select(&self.value_span)
            .next()
            .map(element_text)
            .ok_or_else(|| {
                ScrapeError::structural_mismatch(
                    "room count row has no value span",
                    Some("room table"),
                )
            })?;

        text.parse()
            .map_err(|_| ScrapeError::parse_mismatch("room count", &text))
    }

    /// One room row: the first span is the room index key, the remaining
    /// spans zip positionally against the room labels after the index.
    fn extract_row(&self, row: ElementRef<'_>) -> ScrapeResult<(String, RoomAttributes)> {
        let mut spans = row.select(&self.value_span).map(element_text);
        let index = spans.next().ok_or_else(|| {
            ScrapeError::structural_mismatch("room row has no value spans", Some("room table"))
        })?;

        let value_labels = self.room_labels.get(1..).unwrap_or_default();
        let mut room = RoomAttributes::new();
        for (label, value) in zip_positional(value_labels, spans) {
            room.insert(label.to_string(), value);
        }

        Ok((index, room))
    }
}

impl BlockExtractor for RoomTableExtractor {
    type Output = RoomTable;

    fn extract(&self, block: ElementRef<'_>) -> ScrapeResult<RoomTable> {
        let rows: Vec<ElementRef<'_>> = block.select(&self.room_row).collect();
        if rows.len() < 2 {
            return Err(ScrapeError::structural_mismatch(
                format!("expected count and trailer rows, found {} rows", rows.len()),
                Some("room table"),
            ));
        }

        let count = self.room_count(&rows)?;

        // the window [-2-N+1 : -1]: N rows directly above the trailer
        let end = rows.len() - 1;
        let start = end.checked_sub(count).ok_or_else(|| {
            ScrapeError::structural_mismatch(
                format!("room count {} exceeds the {} rows above the trailer", count, end),
                Some("room table"),
            )
        })?;

        let mut table = RoomTable::new();
        for row in &rows[start..end] {
            let (index, room) = self.extract_row(*row)?;
            table.insert(index, room);
        }

        debug!("extracted {} room rows", table.len());
        Ok(table)
    }
}
