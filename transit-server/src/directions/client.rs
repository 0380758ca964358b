//! Google Directions HTTP client.
//!
//! Fetches transit itineraries between two places. The client owns the
//! query shaping (transit mode, alternatives, region hint for free-text
//! places) so handlers only deal in [`Place`]s.

use super::error::DirectionsError;
use super::types::{DirectionsResponse, Place, RawRoute};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default region hint appended to free-text places.
const DEFAULT_REGION_HINT: &str = "Boston, MA";

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Region hint appended to free-text origins/destinations to
    /// disambiguate short place names
    pub region_hint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region_hint: DEFAULT_REGION_HINT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom region hint.
    pub fn with_region_hint(mut self, hint: impl Into<String>) -> Self {
        self.region_hint = hint.into();
        self
    }
}

/// Client for the Directions API.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    region_hint: String,
}

impl DirectionsClient {
    /// Create a new Directions client.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            region_hint: config.region_hint,
        })
    }

    /// Render a place as a Directions query string.
    ///
    /// Coordinates become "lat,lng"; free text gets the region hint
    /// appended so ambiguous names resolve locally.
    pub fn place_query(&self, place: &Place) -> String {
        match place {
            Place::Coords { lat, lng } => format!("{lat},{lng}"),
            Place::Text(text) => format!("{text}, {}", self.region_hint),
        }
    }

    /// Fetch subway transit routes between two rendered places.
    ///
    /// Returns the provider's routes in its original order. A non-OK
    /// provider status becomes [`DirectionsError::Provider`].
    pub async fn transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawRoute>, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "transit"),
                ("transit_mode", "subway"),
                ("alternatives", "true"),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if parsed.status != "OK" {
            return Err(DirectionsError::Provider {
                status: parsed.status,
                message: parsed.error_message,
            });
        }

        Ok(parsed.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.region_hint, DEFAULT_REGION_HINT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_region_hint("Cambridge, MA");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.region_hint, "Cambridge, MA");
    }

    #[test]
    fn place_query_formats() {
        let client = DirectionsClient::new(DirectionsConfig::new("k")).unwrap();

        let coords = Place::Coords {
            lat: 42.3564,
            lng: -71.0624,
        };
        assert_eq!(client.place_query(&coords), "42.3564,-71.0624");

        let text = Place::Text("Park Street".into());
        assert_eq!(client.place_query(&text), "Park Street, Boston, MA");
    }
}
