//! Error types and handling for the `BikeDay` application

use thiserror::Error;

/// Main error type for the `BikeDay` application
#[derive(Error, Debug)]
pub enum BikeDayError {
    /// Transport, non-2xx, or decode failures from a network client
    #[error("Network error: {message}")]
    Network { message: String },

    /// Forecast payload whose five daily arrays disagree in length
    #[error("Malformed forecast payload: {message}")]
    ShapeMismatch { message: String },
}

impl BikeDayError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new shape-mismatch error
    pub fn shape_mismatch<S: Into<String>>(message: S) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BikeDayError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            BikeDayError::ShapeMismatch { .. } => {
                "Received malformed forecast data. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for BikeDayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
