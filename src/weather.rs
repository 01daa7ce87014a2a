//! Open-Meteo daily forecast client
//!
//! Thin async boundary around the Open-Meteo forecast endpoint. No API key
//! is required. Transport, non-2xx, and decode failures all surface as
//! [`BikeDayError::Network`]; there is no retry and no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::config::BikeDayConfig;
use crate::error::BikeDayError;
use crate::models::RawDailyForecast;

const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,windspeed_10m_max";
const USER_AGENT: &str = concat!("BikeDay/", env!("CARGO_PKG_VERSION"));

/// Source of raw daily forecasts.
///
/// Implemented by [`WeatherClient`] for Open-Meteo and by test doubles.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the raw daily forecast for a coordinate pair.
    async fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<RawDailyForecast>;
}

/// HTTP client for the Open-Meteo daily forecast API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client from configuration
    pub fn new(config: &BikeDayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BikeDayError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.weather_base_url.clone(),
        })
    }
}

#[async_trait]
impl ForecastProvider for WeatherClient {
    #[instrument(skip(self))]
    async fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<RawDailyForecast> {
        let url = format!(
            "{}/v1/forecast?latitude={latitude}&longitude={longitude}&daily={DAILY_VARIABLES}&timezone=auto",
            self.base_url
        );
        debug!("OpenMeteo forecast request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BikeDayError::network(format!(
                "OpenMeteo forecast returned status {}",
                response.status()
            )));
        }

        let body: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            BikeDayError::network(format!("failed to parse OpenMeteo forecast response: {e}"))
        })?;

        let raw = RawDailyForecast::from(body.daily);
        info!(
            "Fetched {} forecast days for {:.4}, {:.4}",
            raw.dates.len(),
            latitude,
            longitude
        );
        Ok(raw)
    }
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use chrono::NaiveDate;
    use serde::Deserialize;

    use crate::models::RawDailyForecast;

    /// Forecast response from the `OpenMeteo` daily endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: DailyData,
    }

    /// Daily weather arrays from `OpenMeteo`, index-aligned by day
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<NaiveDate>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Vec<f64>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Vec<f64>,
        #[serde(rename = "precipitation_probability_max")]
        pub precipitation_probability: Vec<u8>,
        #[serde(rename = "windspeed_10m_max")]
        pub wind_speed_max: Vec<f64>,
    }

    impl From<DailyData> for RawDailyForecast {
        fn from(daily: DailyData) -> Self {
            Self {
                dates: daily.time,
                max_temps: daily.temperature_max,
                min_temps: daily.temperature_min,
                precip_probabilities: daily.precipitation_probability,
                wind_speeds: daily.wind_speed_max,
            }
        }
    }
}
