//! Extraction configuration for the MLS page shape.
//!
//! Centralizes the structural markers (CSS selectors, the one width-style
//! pattern CSS cannot express) and the fixed positional label lists. The
//! defaults describe the known MLS listing page; extractors compile the
//! strings at construction and fail fast on a bad pattern.

use serde::{Deserialize, Serialize};

/// Structural markers and label lists driving the extraction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Selector for one listing block root.
    pub listing_block: String,

    /// Attribute of the block root carrying the MLS number, verbatim.
    pub id_attribute: String,

    /// Selector for the fixed-width vertical groups holding the address.
    pub address_group: String,

    /// Selector for emphasized value spans inside an address group.
    pub emphasized_value: String,

    /// Selector for generic label/value attribute tables.
    pub attribute_table: String,

    /// Regex an attribute table's inline `style` must match (a width
    /// declaration in any unit).
    pub attribute_table_width: String,

    /// Selector for vertical groups of any width; the last two hold the
    /// remarks.
    pub vertical_group: String,

    /// Selector for the horizontal rows of the room table.
    pub room_row: String,

    /// Selector for value spans inside a room row.
    pub value_span: String,

    /// Selector for field label nodes.
    pub field_label: String,

    /// Trailing separator every field label carries.
    pub label_separator: char,

    /// Positional labels for the address spans.
    pub address_labels: Vec<String>,

    /// Positional labels for room row spans; the first is consumed as the
    /// row key, not stored as a value.
    pub room_labels: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_block: r#"div[class^="link-item status-"]"#.to_string(),
            id_attribute: "id".to_string(),
            address_group: r#"div.formitem.formgroup.vertical[style="width:325px"]"#.to_string(),
            emphasized_value: r#"span.value[style="font-weight:bold"]"#.to_string(),
            attribute_table: r#"div[class^="formitem formgroup"]"#.to_string(),
            attribute_table_width: r"^width:\d+(px|%)".to_string(),
            vertical_group: "div.formitem.formgroup.vertical".to_string(),
            room_row: "div.formitem.formgroup.horizontal".to_string(),
            value_span: "span.value".to_string(),
            field_label: "label".to_string(),
            label_separator: ':',
            address_labels: vec![
                "Street Number".to_string(),
                "Unit Number".to_string(),
                "City".to_string(),
                "Province".to_string(),
                "Postal Code".to_string(),
            ],
            room_labels: vec![
                "Room Index".to_string(),
                "Room".to_string(),
                "Level".to_string(),
                "Length".to_string(),
                "Width".to_string(),
                "Description 1".to_string(),
                "Description 2".to_string(),
                "Description 3".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ScrapeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScrapeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.address_labels, config.address_labels);
        assert_eq!(back.label_separator, ':');
    }

    #[test]
    fn default_label_lists_have_expected_shape() {
        let config = ScrapeConfig::default();
        assert_eq!(config.address_labels.len(), 5);
        assert_eq!(config.room_labels.len(), 8);
        assert_eq!(config.room_labels[0], "Room Index");
    }
}
