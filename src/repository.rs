//! Forecast retrieval and scoring pipeline

use tracing::debug;

use crate::Result;
use crate::config::BikeDayConfig;
use crate::models::DayForecast;
use crate::score;
use crate::weather::{ForecastProvider, WeatherClient};

/// Fetches raw daily forecasts and turns them into scored day forecasts.
///
/// Errors from the provider (`Network`) and from scoring (`ShapeMismatch`)
/// pass through untouched for the caller to surface. There is no retry and
/// no caching; every call hits the provider once.
pub struct ForecastRepository {
    provider: Box<dyn ForecastProvider>,
}

impl ForecastRepository {
    /// Repository over any forecast provider
    #[must_use]
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    /// Repository backed by the Open-Meteo client
    pub fn open_meteo(config: &BikeDayConfig) -> Result<Self> {
        Ok(Self::new(Box::new(WeatherClient::new(config)?)))
    }

    /// Fetch and score the multi-day forecast for a coordinate pair.
    pub async fn fetch_scored_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DayForecast>> {
        let raw = self.provider.daily_forecast(latitude, longitude).await?;
        let scored = score::score_all(&raw)?;
        debug!("Scored {} forecast days", scored.len());
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::error::BikeDayError;
    use crate::models::RawDailyForecast;

    struct StubProvider {
        response: Result<RawDailyForecast>,
    }

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn daily_forecast(&self, _latitude: f64, _longitude: f64) -> Result<RawDailyForecast> {
            match &self.response {
                Ok(raw) => Ok(raw.clone()),
                Err(BikeDayError::Network { message }) => Err(BikeDayError::network(message)),
                Err(BikeDayError::ShapeMismatch { message }) => {
                    Err(BikeDayError::shape_mismatch(message))
                }
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_scores_every_day() {
        let raw = RawDailyForecast {
            dates: vec![date("2024-05-01"), date("2024-05-02")],
            max_temps: vec![20.0, 36.0],
            min_temps: vec![10.0, 20.0],
            precip_probabilities: vec![0, 0],
            wind_speeds: vec![0.0, 0.0],
        };
        let repository = ForecastRepository::new(Box::new(StubProvider { response: Ok(raw) }));

        let scored = repository.fetch_scored_forecast(0.0, 0.0).await.unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].bike_score, 100);
        assert_eq!(scored[1].bike_score, 70);
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let repository = ForecastRepository::new(Box::new(StubProvider {
            response: Err(BikeDayError::network("connection reset")),
        }));

        let err = repository.fetch_scored_forecast(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, BikeDayError::Network { .. }));
    }

    #[tokio::test]
    async fn test_shape_mismatch_passes_through() {
        let raw = RawDailyForecast {
            dates: vec![date("2024-05-01")],
            max_temps: vec![20.0],
            min_temps: vec![10.0],
            precip_probabilities: vec![],
            wind_speeds: vec![0.0],
        };
        let repository = ForecastRepository::new(Box::new(StubProvider { response: Ok(raw) }));

        let err = repository.fetch_scored_forecast(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, BikeDayError::ShapeMismatch { .. }));
    }
}
