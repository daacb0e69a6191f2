//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::journey_maps::TransferRequest;
use crate::stations::Station;

/// Default number of stations returned by the picker lookup.
pub const DEFAULT_STATION_LIMIT: usize = 10;

/// Upper bound on the picker lookup limit.
pub const MAX_STATION_LIMIT: usize = 50;

/// Query for the station picker.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Substring of the station name; empty matches all
    #[serde(default)]
    pub query: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl StationSearchRequest {
    /// The requested limit, defaulted and capped.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_STATION_LIMIT)
            .min(MAX_STATION_LIMIT)
    }
}

/// A station in picker results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station number
    pub id: String,

    /// Official station name
    pub name: String,
}

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
        }
    }
}

/// Form submitted from the index page.
#[derive(Debug, Deserialize)]
pub struct TransferForm {
    /// Station number
    pub station: String,

    #[serde(rename = "from-track")]
    pub from_track: String,

    #[serde(rename = "to-track")]
    pub to_track: String,
}

impl TransferForm {
    /// The journey-maps request for this form, always step-free.
    pub fn to_request(&self) -> TransferRequest {
        TransferRequest::new(
            self.station.trim(),
            self.from_track.trim(),
            self.to_track.trim(),
        )
    }
}

/// Response for instruction synthesis.
#[derive(Debug, Serialize)]
pub struct InstructionsResponse {
    /// Instruction sentences in walking order
    pub instructions: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
