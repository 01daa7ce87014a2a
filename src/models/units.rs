//! Temperature display units

use serde::{Deserialize, Serialize};

/// Temperature display unit selected by the user
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Format a Celsius measurement in this unit.
    ///
    /// The value is truncated toward zero, not rounded, before the unit
    /// symbol is appended.
    #[must_use]
    pub fn format(self, celsius: f64) -> String {
        match self {
            TemperatureUnit::Celsius => format!("{}°C", celsius as i64),
            TemperatureUnit::Fahrenheit => format!("{}°F", (celsius * 9.0 / 5.0 + 32.0) as i64),
        }
    }
}
