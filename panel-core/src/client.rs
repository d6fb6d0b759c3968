use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{clock, error::FetchError, model::Snapshot};

/// WeatherAPI.com current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Thin client for the current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint. Used by the config layer
    /// and by tests running against a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions for a location.
    ///
    /// One `GET <base>?key=..&q=<location>&aqi=no`. The query string is
    /// URL-encoded by reqwest. A decoded body that lacks either the
    /// `location` or the `current` section fails with [`FetchError::NoData`];
    /// every other failure is transport/parse.
    pub async fn fetch_current(&self, location: &str) -> Result<Snapshot, FetchError> {
        debug!(location, "requesting current conditions");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, location, "weather endpoint returned non-success status");
            return Err(FetchError::Status(status));
        }

        let parsed: WaEnvelope = serde_json::from_str(&body)?;

        let (Some(loc), Some(current)) = (parsed.location, parsed.current) else {
            warn!(location, "response body is structurally incomplete");
            return Err(FetchError::NoData);
        };

        let localtime = clock::parse_localtime(&loc.localtime)?;
        let region = loc.region.filter(|r| !r.is_empty());

        Ok(Snapshot {
            name: loc.name,
            region,
            temperature_c: current.temp_c,
            condition: current.condition.text,
            icon: current.condition.icon,
            localtime,
            localtime_raw: loc.localtime,
            is_day: current.is_day == 1,
        })
    }
}

// Both top-level sections are optional so an incomplete body is reported as
// "No data returned" instead of a decode error.
#[derive(Debug, Deserialize)]
struct WaEnvelope {
    location: Option<WaLocation>,
    current: Option<WaCurrent>,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: Option<String>,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    is_day: u8,
    condition: WaCondition,
}
