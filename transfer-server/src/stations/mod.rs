//! Station catalogue for the station picker.
//!
//! Stations are read once at startup from the open-data station list (a
//! JSON array of operating points). Only records with both a station number
//! and an official designation are kept.

mod catalog;
mod error;

pub use catalog::{Station, StationCatalog};
pub use error::CatalogError;
