//! Domain model for scraped rental listings.

pub mod listing;

pub use listing::{ListingCollection, RoomAttributes, RoomTable, ScrapeStatus, UnitAttributes};
