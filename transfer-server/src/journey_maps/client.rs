//! Journey-maps HTTP client.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::features::FeatureCollection;

use super::error::TransferError;

/// Default base URL for the journey-maps API.
const DEFAULT_BASE_URL: &str = "https://journey-maps.api.sbb.ch";

/// Configuration for the transfer client.
#[derive(Debug, Clone)]
pub struct TransferClientConfig {
    /// API key sent in the `X-API-Key` header
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Client identifier reported to the API
    pub client: String,
    /// Client version reported to the API
    pub client_version: String,
    /// Language of labels in the response
    pub lang: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransferClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: "webshop".to_string(),
            client_version: "latest".to_string(),
            lang: "en".to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the response language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A walk between two tracks of the same station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferRequest {
    /// Station number, e.g. `8503000` for Zürich HB
    pub station_id: String,
    pub from_track: String,
    pub to_track: String,
    /// Request a step-free route
    pub accessible: bool,
}

impl TransferRequest {
    /// Create an accessible transfer request.
    pub fn new(
        station_id: impl Into<String>,
        from_track: impl Into<String>,
        to_track: impl Into<String>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            from_track: from_track.into(),
            to_track: to_track.into(),
            accessible: true,
        }
    }

    /// Set whether the route must be step-free.
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }
}

/// Client for the journey-maps transfer endpoint.
#[derive(Debug, Clone)]
pub struct TransferClient {
    http: reqwest::Client,
    base_url: String,
    client: String,
    client_version: String,
    lang: String,
}

impl TransferClient {
    /// Create a new transfer client.
    pub fn new(config: TransferClientConfig) -> Result<Self, TransferError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| TransferError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            client: config.client,
            client_version: config.client_version,
            lang: config.lang,
        })
    }

    /// Query parameters for a transfer request.
    fn query(&self, request: &TransferRequest) -> Vec<(&'static str, String)> {
        vec![
            ("client", self.client.clone()),
            ("clientVersion", self.client_version.clone()),
            ("lang", self.lang.clone()),
            ("fromStationID", request.station_id.clone()),
            ("toStationID", request.station_id.clone()),
            ("fromTrack", request.from_track.clone()),
            ("toTrack", request.to_track.clone()),
            ("accessible", request.accessible.to_string()),
        ]
    }

    /// Fetch the feature collection describing a transfer.
    pub async fn fetch(&self, request: &TransferRequest) -> Result<FeatureCollection, TransferError> {
        let url = format!("{}/v1/transfer", self.base_url);
        debug!(
            station = %request.station_id,
            from_track = %request.from_track,
            to_track = %request.to_track,
            "requesting transfer"
        );

        let response = self.http.get(&url).query(&self.query(request)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TransferError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "transfer request failed");
            return Err(TransferError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| TransferError::Json {
                message: e.to_string(),
            })?;

        debug!(features = collection.features.len(), "received transfer");
        Ok(collection)
    }
}
