//! Bike score engine: per-day cycling suitability from daily weather
//!
//! Every day starts at 100 points and loses points through three
//! independent penalty chains (temperature, precipitation probability,
//! wind speed). Each chain is exclusive: thresholds are checked high to
//! low and only the first matching tier applies.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::BikeDayError;
use crate::models::{DayForecast, RawDailyForecast};

/// Score one day 0-100 for cycling suitability.
///
/// The temperature chain mixes max- and min-based branches in a single
/// exclusive chain: a day that trips any max-temp tier never also takes
/// a min-temp penalty. Branch order is load-bearing.
#[must_use]
pub fn bike_score(max_temp: f64, min_temp: f64, precip_probability: u8, wind_speed: f64) -> u8 {
    let mut score: i32 = 100;

    // Temperature penalties
    if max_temp > 35.0 {
        score -= 30;
    } else if max_temp > 30.0 {
        score -= 20;
    } else if max_temp > 25.0 {
        score -= 10;
    } else if min_temp < 5.0 {
        score -= 20;
    } else if min_temp < 10.0 {
        score -= 10;
    }

    // Precipitation probability penalties
    if precip_probability > 70 {
        score -= 40;
    } else if precip_probability > 50 {
        score -= 30;
    } else if precip_probability > 30 {
        score -= 20;
    } else if precip_probability > 10 {
        score -= 10;
    }

    // Wind speed penalties (m/s)
    if wind_speed > 10.0 {
        score -= 30;
    } else if wind_speed > 7.0 {
        score -= 20;
    } else if wind_speed > 5.0 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Score every day of a raw forecast, preserving input order.
///
/// Produces one [`DayForecast`] per index, day 0 soonest. Fails with
/// [`BikeDayError::ShapeMismatch`] when the five parallel arrays disagree
/// in length; no partial result is ever returned.
pub fn score_all(raw: &RawDailyForecast) -> Result<Vec<DayForecast>> {
    let days = raw.days().ok_or_else(|| {
        BikeDayError::shape_mismatch(format!(
            "daily arrays disagree in length: dates={} max={} min={} precip={} wind={}",
            raw.dates.len(),
            raw.max_temps.len(),
            raw.min_temps.len(),
            raw.precip_probabilities.len(),
            raw.wind_speeds.len()
        ))
    })?;

    Ok((0..days)
        .map(|i| DayForecast {
            date: raw.dates[i],
            max_temp: raw.max_temps[i],
            min_temp: raw.min_temps[i],
            precipitation_probability: raw.precip_probabilities[i],
            wind_speed: raw.wind_speeds[i],
            bike_score: bike_score(
                raw.max_temps[i],
                raw.min_temps[i],
                raw.precip_probabilities[i],
                raw.wind_speeds[i],
            ),
        })
        .collect())
}

/// Presentation color bucket for a bike score
///
/// Boundaries are inclusive at the lower end of each tier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    /// score >= 90
    Excellent,
    /// score >= 75
    Great,
    /// score >= 60
    Good,
    /// score >= 45
    Fair,
    /// score >= 30
    Poor,
    /// everything below 30
    Bad,
}

impl ScoreBucket {
    /// Bucket a score, first matching tier wins
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75.. => Self::Great,
            60.. => Self::Good,
            45.. => Self::Fair,
            30.. => Self::Poor,
            _ => Self::Bad,
        }
    }
}
