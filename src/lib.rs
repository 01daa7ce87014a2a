//! `BikeDay` - find the best upcoming day for a bike ride
//!
//! This library provides the core functionality for fetching multi-day
//! weather forecasts, deriving a 0-100 bike score per day, and driving
//! the reactive application state a presentation layer renders.

pub mod app;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod repository;
pub mod score;
pub mod weather;

// Re-export core types for public API
pub use app::{AppState, Observer, StateSnapshot};
pub use config::BikeDayConfig;
pub use error::BikeDayError;
pub use geocoding::{GeocodingClient, GeocodingResult};
pub use models::{City, DayForecast, RawDailyForecast, TemperatureUnit, city_catalog};
pub use repository::ForecastRepository;
pub use score::{ScoreBucket, bike_score, score_all};
pub use weather::{ForecastProvider, WeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BikeDayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
