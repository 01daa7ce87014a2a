//! Daily forecast models: raw parallel arrays and the scored per-day view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw multi-day forecast as five index-aligned parallel sequences.
///
/// Index i across all five vectors describes the same calendar day;
/// day 0 is the soonest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawDailyForecast {
    /// Forecast dates, soonest first
    pub dates: Vec<NaiveDate>,
    /// Daily maximum temperature in Celsius
    pub max_temps: Vec<f64>,
    /// Daily minimum temperature in Celsius
    pub min_temps: Vec<f64>,
    /// Daily maximum precipitation probability, 0-100
    pub precip_probabilities: Vec<u8>,
    /// Daily maximum wind speed in m/s
    pub wind_speeds: Vec<f64>,
}

impl RawDailyForecast {
    /// Number of forecast days, or `None` if the parallel arrays disagree
    /// in length.
    #[must_use]
    pub fn days(&self) -> Option<usize> {
        let n = self.dates.len();
        (self.max_temps.len() == n
            && self.min_temps.len() == n
            && self.precip_probabilities.len() == n
            && self.wind_speeds.len() == n)
            .then_some(n)
    }
}

/// One day's weather plus its derived bike score
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayForecast {
    /// Calendar day this forecast describes
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub max_temp: f64,
    /// Minimum temperature in Celsius
    pub min_temp: f64,
    /// Precipitation probability, 0-100
    pub precipitation_probability: u8,
    /// Maximum wind speed in m/s
    pub wind_speed: f64,
    /// Derived cycling suitability, 0-100
    pub bike_score: u8,
}
