//! Configuration for the `BikeDay` application
//!
//! Provides endpoint and request settings with sensible defaults and
//! optional environment variable overrides.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root configuration structure for the `BikeDay` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BikeDayConfig {
    /// Base URL for the Open-Meteo forecast API
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Base URL for the Open-Meteo geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of geocoding results per search
    #[serde(default = "default_geocoding_count")]
    pub geocoding_count: u8,
    /// Language for geocoding results
    #[serde(default = "default_geocoding_language")]
    pub geocoding_language: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_geocoding_count() -> u8 {
    5
}

fn default_geocoding_language() -> String {
    "en".to_string()
}

impl Default for BikeDayConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_seconds: default_timeout(),
            geocoding_count: default_geocoding_count(),
            geocoding_language: default_geocoding_language(),
        }
    }
}

impl BikeDayConfig {
    /// Defaults with `BIKEDAY_*` environment variable overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("BIKEDAY_WEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        if let Ok(url) = std::env::var("BIKEDAY_GEOCODING_BASE_URL") {
            config.geocoding_base_url = url;
        }
        if let Ok(raw) = std::env::var("BIKEDAY_TIMEOUT_SECONDS") {
            match raw.parse() {
                Ok(seconds) => config.timeout_seconds = seconds,
                Err(_) => warn!("Ignoring invalid BIKEDAY_TIMEOUT_SECONDS: {raw}"),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BikeDayConfig::default();
        assert_eq!(config.weather_base_url, "https://api.open-meteo.com");
        assert_eq!(config.geocoding_base_url, "https://geocoding-api.open-meteo.com");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.geocoding_count, 5);
        assert_eq!(config.geocoding_language, "en");
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: BikeDayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.geocoding_language, "en");
    }
}
