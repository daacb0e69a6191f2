//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTransferClient;
use crate::instructions::SynthesisConfig;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached journey-maps client
    pub transfers: Arc<CachedTransferClient>,

    /// Stations offered in the picker
    pub stations: Arc<StationCatalog>,

    /// Instruction synthesis tuning
    pub synthesis: Arc<SynthesisConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        transfers: CachedTransferClient,
        stations: StationCatalog,
        synthesis: SynthesisConfig,
    ) -> Self {
        Self {
            transfers: Arc::new(transfers),
            stations: Arc::new(stations),
            synthesis: Arc::new(synthesis),
        }
    }
}
