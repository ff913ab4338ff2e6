//! Field extractor: unit attributes of one listing block.
//!
//! Three sub-extractions merged in order - address fields, generic
//! attribute tables, remarks - with later merges overwriting earlier ones
//! on label collision. The page carries no field names for the address;
//! only span position communicates meaning.

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use super::config::ScrapeConfig;
use super::{compile_selector, element_text, zip_positional, BlockExtractor, ScrapeError, ScrapeResult};
use crate::domain::UnitAttributes;

/// Extracts the unit attribute map from one listing block.
pub struct FieldExtractor {
    address_group: Selector,
    emphasized_value: Selector,
    attribute_table: Selector,
    attribute_table_width: Regex,
    vertical_group: Selector,
    field_label: Selector,
    label_separator: char,
    address_labels: Vec<String>,
}

impl FieldExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&ScrapeConfig::default())
    }

    pub fn with_config(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Ok(Self {
            address_group: compile_selector(&config.address_group)?,
            emphasized_value: compile_selector(&config.emphasized_value)?,
            attribute_table: compile_selector(&config.attribute_table)?,
            attribute_table_width: Regex::new(&config.attribute_table_width).map_err(|e| {
                ScrapeError::invalid_pattern(&config.attribute_table_width, &e.to_string())
            })?,
            vertical_group: compile_selector(&config.vertical_group)?,
            field_label: compile_selector(&config.field_label)?,
            label_separator: config.label_separator,
            address_labels: config.address_labels.clone(),
        })
    }

    /// Address fields from the fixed-width vertical groups.
    ///
    /// Emphasized spans are zipped positionally against the address label
    /// list; fewer spans than labels assigns only the available prefix and
    /// is not an error.
    fn extract_address(&self, block: ElementRef<'_>) -> UnitAttributes {
        let mut attrs = UnitAttributes::new();

        for group in block.select(&self.address_group) {
            let values = group.select(&self.emphasized_value).map(element_text);
            for (label, value) in zip_positional(&self.address_labels, values) {
                attrs.insert(label.to_string(), value);
            }
        }

        debug!("extracted {} address fields", attrs.len());
        attrs
    }

    /// Label/value pairs from every attribute table: containers whose
    /// class matches the table prefix and whose inline style declares a
    /// width in any unit.
    fn extract_attribute_tables(&self, block: ElementRef<'_>) -> ScrapeResult<UnitAttributes> {
        let mut attrs = UnitAttributes::new();

        for table in block.select(&self.attribute_table) {
            let style = table.value().attr("style").unwrap_or("");
            if !self.attribute_table_width.is_match(style) {
                continue;
            }
            attrs.extend(self.label_value_pairs(table)?);
        }

        Ok(attrs)
    }

    /// Label/value pairs from the last two vertical groups (the remarks),
    /// merged last so they may overwrite same-named fields.
    fn extract_remarks(&self, block: ElementRef<'_>) -> ScrapeResult<UnitAttributes> {
        let groups: Vec<ElementRef<'_>> = block.select(&self.vertical_group).collect();
        let start = groups.len().saturating_sub(2);

        let mut attrs = UnitAttributes::new();
        for group in &groups[start..] {
            attrs.extend(self.label_value_pairs(*group)?);
        }

        Ok(attrs)
    }

    /// Label-value algorithm: every label node yields one pair. The label
    /// text must end in the separator character; the value is the text of
    /// the label's next sibling element.
    fn label_value_pairs(&self, container: ElementRef<'_>) -> ScrapeResult<UnitAttributes> {
        let mut attrs = UnitAttributes::new();

        for label_node in container.select(&self.field_label) {
            let raw = element_text(label_node);
            let label = raw.strip_suffix(self.label_separator).ok_or_else(|| {
                ScrapeError::structural_mismatch(
                    format!("label '{}' missing trailing '{}'", raw, self.label_separator),
                    Some("label-value pair"),
                )
            })?;

            let value = label_node
                .next_siblings()
                .find_map(ElementRef::wrap)
                .ok_or_else(|| {
                    ScrapeError::structural_mismatch(
                        format!("label '{}' has no sibling value", label),
                        Some("label-value pair"),
                    )
                })?;

            attrs.insert(label.to_string(), element_text(value));
        }

        Ok(attrs)
    }
}

impl BlockExtractor for FieldExtractor {
    type Output = UnitAttributes;

    fn extract(&self, block: ElementRef<'_>) -> ScrapeResult<UnitAttributes> {
        let mut attrs = self.extract_address(block);
        attrs.extend(self.extract_attribute_tables(block)?);
        attrs.extend(self.extract_remarks(block)?);
        Ok(attrs)
    }
}
