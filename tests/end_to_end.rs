//! End-to-end runs over a saved-page fixture: status partitioning,
//! per-listing failure isolation, idempotence, and both export shapes.

use std::fs;

use indexmap::IndexMap;
use mls_scraper::domain::{RoomTable, UnitAttributes};
use mls_scraper::export::{DataTable, ScrapeOutput};
use mls_scraper::scraping::ScrapeEngine;

fn room_row(values: &[&str]) -> String {
    let spans: String = values
        .iter()
        .map(|v| format!(r#"<span class="value">{v}</span>"#))
        .collect();
    format!(r#"<div class="formitem formgroup horizontal">{spans}</div>"#)
}

/// A complete, well-formed listing block with two rooms.
fn good_listing(id: &str) -> String {
    let address = r#"
        <div class="formitem formgroup vertical" style="width:325px">
          <span class="value" style="font-weight:bold">12</span>
          <span class="value" style="font-weight:bold">4</span>
          <span class="value" style="font-weight:bold">Toronto</span>
          <span class="value" style="font-weight:bold">ON</span>
          <span class="value" style="font-weight:bold">M5V 2T6</span>
        </div>"#;
    let attributes = r#"
        <div class="formitem formgroup" style="width:50%">
          <label>Bedrooms:</label><span class="value">2</span>
          <label>Bathrooms:</label><span class="value">1</span>
        </div>"#;
    let rooms = [
        room_row(&["1", "Living", "Main", "3.9", "6.6", "Hardwood Floor", "Large Window", ""]),
        room_row(&["2", "Kitchen", "Main", "2.5", "3.0", "Tile Floor", "", ""]),
        room_row(&["Summary"]),
    ]
    .concat();
    let remarks = r#"
        <div class="formitem formgroup vertical">
          <label>Remarks:</label><span class="value">Bright corner unit</span>
        </div>
        <div class="formitem formgroup vertical">
          <label>Extras:</label><span class="value">Fridge and stove</span>
        </div>"#;

    format!(
        r#"<div class="link-item status-A" id="{id}">{address}{attributes}{rooms}{remarks}</div>"#
    )
}

/// A listing block whose label node has no sibling value.
fn malformed_listing(id: &str) -> String {
    format!(
        r#"<div class="link-item status-U" id="{id}">
             <div class="formitem formgroup" style="width:50%">
               <label>Bedrooms:</label>
             </div>
           </div>"#
    )
}

fn two_listing_page() -> String {
    format!(
        "<html><body>{}{}</body></html>",
        good_listing("W5555555"),
        malformed_listing("W0000001")
    )
}

fn run_engine(html: &str) -> ScrapeEngine {
    let mut engine = ScrapeEngine::new().unwrap();
    engine.load_str(html);
    engine.extract_all().unwrap();
    engine
}

#[test]
fn status_partitions_all_discovered_listings() {
    let engine = run_engine(&two_listing_page());
    let status = engine.status();

    assert_eq!(status.success, vec!["W5555555"]);
    assert_eq!(status.failure, vec!["W0000001"]);
    assert_eq!(status.discovered(), 2);
}

#[test]
fn failed_listing_stores_nothing_in_either_map() {
    let engine = run_engine(&two_listing_page());
    let collection = engine.collection();

    assert!(collection.unit_attrs.contains_key("W5555555"));
    assert!(collection.rooms.contains_key("W5555555"));
    assert!(!collection.unit_attrs.contains_key("W0000001"));
    assert!(!collection.rooms.contains_key("W0000001"));
}

#[test]
fn well_formed_listing_extracts_all_field_groups() {
    let engine = run_engine(&two_listing_page());
    let attrs = &engine.collection().unit_attrs["W5555555"];

    assert_eq!(attrs["Street Number"], "12");
    assert_eq!(attrs["Postal Code"], "M5V 2T6");
    assert_eq!(attrs["Bedrooms"], "2");
    assert_eq!(attrs["Remarks"], "Bright corner unit");
    assert_eq!(attrs["Extras"], "Fridge and stove");

    let rooms = &engine.collection().rooms["W5555555"];
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms["1"]["Room"], "Living");
    assert_eq!(rooms["2"]["Description 1"], "Tile Floor");
}

#[test]
fn rerunning_extract_all_is_idempotent() {
    let mut engine = ScrapeEngine::new().unwrap();
    engine.load_str(&two_listing_page());

    engine.extract_all().unwrap();
    let first_status = engine.status().clone();
    let first_collection = engine.collection().clone();

    engine.extract_all().unwrap();
    assert_eq!(engine.status(), &first_status);
    assert_eq!(engine.collection(), &first_collection);
}

#[test]
fn nested_and_tabular_shapes_carry_identical_room_data() {
    let engine = run_engine(&two_listing_page());

    let nested = engine.export(None, false).unwrap();
    let tabular = engine.export(None, true).unwrap();

    let (nested_rooms, table) = match (nested, tabular) {
        (ScrapeOutput::Nested { rooms, .. }, ScrapeOutput::Tabular { rooms: table, .. }) => {
            (rooms, table)
        }
        _ => panic!("unexpected output shapes"),
    };

    for (id, room_table) in &nested_rooms {
        for (index, room) in room_table {
            let row = table
                .rows
                .iter()
                .find(|r| &r[0] == id && &r[1] == index)
                .expect("flattened row for every (listing, room)");
            for (label, value) in room {
                let col = table
                    .columns
                    .iter()
                    .position(|c| c == label)
                    .expect("column for every label");
                assert_eq!(&row[col], value, "cell mismatch at ({id}, {index}, {label})");
            }
        }
    }
}

#[test]
fn tabular_export_writes_csv_files() {
    let engine = run_engine(&two_listing_page());
    let dir = tempfile::tempdir().unwrap();

    engine.export(Some(dir.path()), true).unwrap();

    let units = fs::read_to_string(dir.path().join("unit_attrs.csv")).unwrap();
    let unit_lines: Vec<&str> = units.lines().collect();
    // header plus exactly one data row: the malformed listing stores nothing
    assert_eq!(unit_lines.len(), 2);
    assert!(unit_lines[0].starts_with("MLS Number,"));
    assert!(unit_lines[1].starts_with("W5555555,"));

    let rooms = fs::read_to_string(dir.path().join("rooms.csv")).unwrap();
    assert_eq!(rooms.lines().count(), 3); // header + two rooms
}

#[test]
fn nested_export_writes_json_files_matching_the_collection() {
    let engine = run_engine(&two_listing_page());
    let dir = tempfile::tempdir().unwrap();

    engine.export(Some(dir.path()), false).unwrap();

    let units: IndexMap<String, UnitAttributes> = serde_json::from_str(
        &fs::read_to_string(dir.path().join("unit_attrs.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(units, engine.collection().unit_attrs);

    let rooms: IndexMap<String, RoomTable> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("rooms.json")).unwrap()).unwrap();
    assert_eq!(rooms, engine.collection().rooms);
}

#[test]
fn export_without_directory_returns_in_memory_shape() {
    let engine = run_engine(&two_listing_page());

    match engine.export(None, true).unwrap() {
        ScrapeOutput::Tabular { unit_attrs, .. } => {
            let expected = DataTable::from_unit_attrs(engine.collection());
            assert_eq!(unit_attrs, expected);
        }
        ScrapeOutput::Nested { .. } => panic!("expected tabular shape"),
    }
}
