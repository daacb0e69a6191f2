//! Client for the journey-maps transfer API.
//!
//! A transfer is requested for one station and a pair of tracks; the
//! response is a GeoJSON feature collection describing the walk between
//! them (walkways, lifts, stairs and the two platform endpoints).

mod client;
mod error;

pub use client::{TransferClient, TransferClientConfig, TransferRequest};
pub use error::TransferError;
