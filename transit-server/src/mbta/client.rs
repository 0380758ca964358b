//! MBTA V3 API HTTP client.
//!
//! Thin field-mapping proxy over the stops, predictions, and vehicles
//! endpoints. Authentication uses the `x-api-key` header.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::error::MbtaError;
use super::types::{ApiList, PredictionResource, StopResource, VehicleResource};

/// Default base URL for the MBTA V3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Route types for subway stops: 0 = light rail, 1 = heavy rail.
const RAIL_ROUTE_TYPES: &str = "0,1";

/// How many predictions to request per stop.
const PREDICTION_LIMIT: &str = "5";

/// Configuration for the MBTA API client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key for x-api-key header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the MBTA V3 API.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MbtaClient {
    /// Create a new MBTA client.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| MbtaError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch all subway (light + heavy rail) stops.
    pub async fn rail_stops(&self) -> Result<Vec<StopResource>, MbtaError> {
        self.get_list(
            "/stops",
            &[
                ("filter[route_type]", RAIL_ROUTE_TYPES),
                ("include", "parent_station"),
            ],
        )
        .await
    }

    /// Fetch the next arrivals predicted at a stop, soonest first.
    pub async fn predictions(&self, stop_id: &str) -> Result<Vec<PredictionResource>, MbtaError> {
        self.get_list(
            "/predictions",
            &[
                ("filter[stop]", stop_id),
                ("include", "route"),
                ("sort", "arrival_time"),
                ("page[limit]", PREDICTION_LIMIT),
            ],
        )
        .await
    }

    /// Fetch live vehicle positions for a comma-separated route filter.
    pub async fn vehicles(&self, routes: &str) -> Result<Vec<VehicleResource>, MbtaError> {
        self.get_list(
            "/vehicles",
            &[("filter[route]", routes), ("include", "route")],
        )
        .await
    }

    /// Fetch and unwrap a JSON:API list endpoint.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, MbtaError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let list: ApiList<T> = serde_json::from_str(&body).map_err(|e| MbtaError::Json {
            message: e.to_string(),
        })?;

        Ok(list.data)
    }
}
