//! Station catalogue error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The station file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The station file is not a JSON array of records
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
