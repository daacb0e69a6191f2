//! Station lookup by name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::CatalogError;

/// A station that transfers can be requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    /// Station number, as sent to journey-maps
    pub id: String,
    pub name: String,
}

/// One record of the station file. Every other field is ignored.
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(rename = "operatingpointkilometermasternumber")]
    number: Option<serde_json::Value>,
    #[serde(rename = "designationofficial")]
    name: Option<String>,
}

impl StationRecord {
    fn into_station(self) -> Option<Station> {
        let id = match self.number? {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            _ => return None,
        };
        Some(Station {
            id,
            name: self.name?,
        })
    }
}

/// Stations in file order.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Create a catalogue from stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Load the catalogue from a station file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&contents)?;
        info!(path = %path.display(), stations = catalog.len(), "loaded station catalogue");
        Ok(catalog)
    }

    /// Parse the catalogue from the contents of a station file.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;

        let total = records.len();
        let stations: Vec<Station> = records
            .into_iter()
            .filter_map(StationRecord::into_station)
            .collect();
        debug!(total, kept = stations.len(), "parsed station records");

        Ok(Self { stations })
    }

    /// Stations whose name contains `query`, ignoring case.
    ///
    /// Results keep catalogue order. An empty query matches every station.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let query = query.to_lowercase();
        self.stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.stations.len()
    }
}
