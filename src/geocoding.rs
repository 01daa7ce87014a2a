//! Open-Meteo geocoding client for city search
//!
//! Per the application's search design, typing in the search box only
//! filters the built-in catalog; this client is for callers that resolve
//! free-form place names explicitly.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::config::BikeDayConfig;
use crate::error::BikeDayError;
use crate::models::City;

const USER_AGENT: &str = concat!("BikeDay/", env!("CARGO_PKG_VERSION"));

/// One place returned by the geocoding search
///
/// Ephemeral: results live only while a search dropdown shows them and
/// are converted to [`City`] on selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingResult {
    /// Place name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    pub country: String,
    /// First-level administrative area, when the upstream knows it
    pub admin1: Option<String>,
}

impl GeocodingResult {
    /// "name, region, country", skipping a missing region
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.admin1 {
            Some(region) => format!("{}, {}, {}", self.name, region, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}

impl From<GeocodingResult> for City {
    fn from(result: GeocodingResult) -> Self {
        City {
            name: result.name,
            region: result.admin1.unwrap_or_default(),
            country: result.country,
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

/// HTTP client for the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    count: u8,
    language: String,
}

impl GeocodingClient {
    /// Create a new geocoding client from configuration
    pub fn new(config: &BikeDayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BikeDayError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.geocoding_base_url.clone(),
            count: config.geocoding_count,
            language: config.geocoding_language.clone(),
        })
    }

    /// Search place names, best matches first.
    ///
    /// A query the upstream knows nothing about yields an empty list, not
    /// an error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>> {
        let url = format!(
            "{}/v1/search?name={}&count={}&language={}&format=json",
            self.base_url,
            urlencoding::encode(query),
            self.count,
            self.language
        );
        debug!("OpenMeteo geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BikeDayError::network(format!(
                "OpenMeteo geocoding returned status {}",
                response.status()
            )));
        }

        let body: openmeteo::GeocodingResponse = response.json().await.map_err(|e| {
            BikeDayError::network(format!("failed to parse OpenMeteo geocoding response: {e}"))
        })?;

        let results: Vec<GeocodingResult> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();
        info!("Geocoding for '{}' returned {} results", query, results.len());
        Ok(results)
    }
}

/// `OpenMeteo` geocoding response structures
mod openmeteo {
    use serde::Deserialize;

    use super::GeocodingResult;

    /// Search response; `results` is absent when nothing matched
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingEntry>>,
    }

    /// One geocoding match from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct GeocodingEntry {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub admin1: Option<String>,
    }

    impl From<GeocodingEntry> for GeocodingResult {
        fn from(entry: GeocodingEntry) -> Self {
            Self {
                name: entry.name,
                latitude: entry.latitude,
                longitude: entry.longitude,
                country: entry.country.unwrap_or_default(),
                admin1: entry.admin1,
            }
        }
    }
}
