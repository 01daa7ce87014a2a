//! Data models for the `BikeDay` application
//!
//! This module contains the core domain models organized by concern:
//! - City: search catalog entries with coordinates
//! - Forecast: raw daily weather arrays and the scored per-day view
//! - Units: temperature display policy

pub mod city;
pub mod forecast;
pub mod units;

// Re-export all public types for convenient access
pub use city::{City, city_catalog};
pub use forecast::{DayForecast, RawDailyForecast};
pub use units::TemperatureUnit;
