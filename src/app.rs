//! Reactive application state for the forecast screen
//!
//! [`AppState`] owns every state slice the presentation layer renders and
//! exposes the operations that mutate them. All mutation happens through
//! these operations; registered observers are notified synchronously after
//! each one with a full snapshot. One instance lives per screen session,
//! explicitly constructed and handed to the presentation layer; nothing is
//! persisted when it drops.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::Result;
use crate::config::BikeDayConfig;
use crate::models::{City, DayForecast, TemperatureUnit, city_catalog};
use crate::repository::ForecastRepository;

/// Immutable copy of every state slice, handed to observers
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    /// Scored forecast days, soonest first; empty before the first load
    pub forecasts: Vec<DayForecast>,
    /// Whether a forecast fetch is in flight
    pub is_loading: bool,
    /// Message of the most recent failed load, cleared on the next load
    pub error: Option<String>,
    /// Current search box text
    pub search_query: String,
    /// Catalog cities matching the search query, catalog order
    pub filtered_cities: Vec<City>,
    /// Selected temperature display unit
    pub selected_unit: TemperatureUnit,
}

/// Callback invoked synchronously after every state mutation
pub type Observer = Box<dyn Fn(&StateSnapshot) + Send + Sync>;

/// Application state machine driving the forecast screen
pub struct AppState {
    repository: ForecastRepository,
    cities: Vec<City>,
    slices: Mutex<StateSnapshot>,
    observers: Mutex<Vec<Observer>>,
}

impl AppState {
    /// State for one screen session, backed by the given repository
    #[must_use]
    pub fn new(repository: ForecastRepository) -> Self {
        let cities = city_catalog();
        let slices = StateSnapshot {
            forecasts: Vec::new(),
            is_loading: false,
            error: None,
            search_query: String::new(),
            filtered_cities: cities.clone(),
            selected_unit: TemperatureUnit::Celsius,
        };

        Self {
            repository,
            cities,
            slices: Mutex::new(slices),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Convenience constructor over the Open-Meteo backed repository
    pub fn open_meteo(config: &BikeDayConfig) -> Result<Self> {
        Ok(Self::new(ForecastRepository::open_meteo(config)?))
    }

    /// Register an observer called synchronously after every mutation
    pub fn subscribe(&self, observer: Observer) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Load and score the forecast for a coordinate pair.
    ///
    /// The loading flag is raised and any prior error cleared synchronously
    /// before the fetch suspends. On success the forecast slice is replaced;
    /// on failure only the error slice changes, leaving stale forecasts
    /// visible behind the error. Concurrent calls are neither de-duplicated
    /// nor cancelled: every call runs to completion and the last response to
    /// resolve overwrites the slices, even when it belongs to the older
    /// request.
    pub async fn load_forecast(&self, latitude: f64, longitude: f64) {
        self.mutate(|slices| {
            slices.is_loading = true;
            slices.error = None;
        });

        match self.repository.fetch_scored_forecast(latitude, longitude).await {
            Ok(forecasts) => {
                debug!("Loaded {} scored forecast days", forecasts.len());
                self.mutate(|slices| {
                    slices.forecasts = forecasts;
                    slices.is_loading = false;
                });
            }
            Err(err) => {
                warn!("Forecast load failed: {err}");
                self.mutate(|slices| {
                    slices.error = Some(err.to_string());
                    slices.is_loading = false;
                });
            }
        }
    }

    /// Update the search box text and recompute the city dropdown.
    ///
    /// A blank query restores the full catalog; anything else keeps the
    /// cities whose display name contains the query, case-insensitively,
    /// in catalog order. Typing never triggers geocoding.
    pub fn change_search_query(&self, query: &str) {
        let filtered = if query.trim().is_empty() {
            self.cities.clone()
        } else {
            let needle = query.to_lowercase();
            self.cities
                .iter()
                .filter(|city| city.display_name().to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        self.mutate(|slices| {
            slices.search_query = query.to_string();
            slices.filtered_cities = filtered;
        });
    }

    /// Pick a city from the dropdown and load its forecast.
    pub async fn select_city(&self, city: &City) {
        self.mutate(|slices| {
            slices.search_query = city.display_name();
            slices.filtered_cities = Vec::new();
        });

        self.load_forecast(city.latitude, city.longitude).await;
    }

    /// Switch the temperature display unit. Nothing is refetched or
    /// rescored.
    pub fn set_temperature_unit(&self, unit: TemperatureUnit) {
        self.mutate(|slices| slices.selected_unit = unit);
    }

    /// The full built-in city catalog, in display order
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Copy of all state slices
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.lock_slices().clone()
    }

    /// Scored forecast days, soonest first
    #[must_use]
    pub fn forecasts(&self) -> Vec<DayForecast> {
        self.lock_slices().forecasts.clone()
    }

    /// Whether a forecast fetch is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock_slices().is_loading
    }

    /// Message of the most recent failed load, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.lock_slices().error.clone()
    }

    /// Current search box text
    #[must_use]
    pub fn search_query(&self) -> String {
        self.lock_slices().search_query.clone()
    }

    /// Catalog cities matching the current search query
    #[must_use]
    pub fn filtered_cities(&self) -> Vec<City> {
        self.lock_slices().filtered_cities.clone()
    }

    /// Selected temperature display unit
    #[must_use]
    pub fn selected_unit(&self) -> TemperatureUnit {
        self.lock_slices().selected_unit
    }

    /// Apply a mutation, then notify every observer with the new snapshot.
    fn mutate(&self, apply: impl FnOnce(&mut StateSnapshot)) {
        let snapshot = {
            let mut slices = self.lock_slices();
            apply(&mut slices);
            slices.clone()
        };

        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for observer in observers.iter() {
            observer(&snapshot);
        }
    }

    fn lock_slices(&self) -> MutexGuard<'_, StateSnapshot> {
        self.slices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::error::BikeDayError;
    use crate::models::RawDailyForecast;
    use crate::weather::ForecastProvider;

    /// Provider that serves a fixed single-day forecast, or fails when the
    /// latitude is negative.
    struct StubProvider;

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn daily_forecast(&self, latitude: f64, _longitude: f64) -> crate::Result<RawDailyForecast> {
            if latitude < 0.0 {
                return Err(BikeDayError::network("stubbed outage"));
            }
            Ok(RawDailyForecast {
                dates: vec![NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()],
                max_temps: vec![latitude],
                min_temps: vec![10.0],
                precip_probabilities: vec![0],
                wind_speeds: vec![0.0],
            })
        }
    }

    fn state() -> AppState {
        AppState::new(ForecastRepository::new(Box::new(StubProvider)))
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        let snapshot = state.snapshot();

        assert!(snapshot.forecasts.is_empty());
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.search_query, "");
        assert_eq!(snapshot.filtered_cities.len(), 20);
        assert_eq!(snapshot.selected_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let state = state();

        state.change_search_query("san");
        let filtered = state.filtered_cities();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].display_name(), "San Francisco, California, USA");
        assert_eq!(state.search_query(), "san");
    }

    #[test]
    fn test_search_matches_region_and_country() {
        let state = state();

        // "california" lives in the region part of the display name
        state.change_search_query("CALIFORNIA");
        let names: Vec<String> = state
            .filtered_cities()
            .iter()
            .map(City::display_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Los Angeles, California, USA",
                "San Francisco, California, USA"
            ]
        );

        // and "japan" in the country part
        state.change_search_query("japan");
        let filtered = state.filtered_cities();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Tokyo");
    }

    #[test]
    fn test_blank_query_restores_catalog() {
        let state = state();

        state.change_search_query("san");
        assert_eq!(state.filtered_cities().len(), 1);

        state.change_search_query("   ");
        let restored = state.filtered_cities();
        assert_eq!(restored.len(), 20);
        assert_eq!(restored[0].name, "New York");
    }

    #[test]
    fn test_unmatched_query_yields_empty_dropdown() {
        let state = state();
        state.change_search_query("atlantis");
        assert!(state.filtered_cities().is_empty());
    }

    #[test]
    fn test_set_unit_changes_nothing_else() {
        let state = state();
        let before = state.snapshot();

        state.set_temperature_unit(TemperatureUnit::Fahrenheit);
        let after = state.snapshot();

        assert_eq!(after.selected_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(after.forecasts, before.forecasts);
        assert_eq!(after.search_query, before.search_query);
        assert_eq!(after.filtered_cities, before.filtered_cities);
    }

    #[tokio::test]
    async fn test_load_forecast_success() {
        let state = state();

        state.load_forecast(20.0, 0.0).await;

        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        let forecasts = state.forecasts();
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].max_temp, 20.0);
        assert_eq!(forecasts[0].bike_score, 100);
    }

    #[tokio::test]
    async fn test_load_forecast_failure_keeps_stale_forecasts() {
        let state = state();

        state.load_forecast(20.0, 0.0).await;
        assert_eq!(state.forecasts().len(), 1);

        state.load_forecast(-1.0, 0.0).await;
        assert!(!state.is_loading());
        assert_eq!(
            state.error().as_deref(),
            Some("Network error: stubbed outage")
        );
        // stale data from the earlier successful load survives the failure
        assert_eq!(state.forecasts().len(), 1);
        assert_eq!(state.forecasts()[0].max_temp, 20.0);
    }

    #[tokio::test]
    async fn test_load_forecast_clears_previous_error() {
        let state = state();

        state.load_forecast(-1.0, 0.0).await;
        assert!(state.error().is_some());

        state.load_forecast(20.0, 0.0).await;
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_select_city_state_shape() {
        let state = state();
        let city = City::new("Seattle", "Washington", "USA", 47.6062, -122.3321);

        state.change_search_query("sea");
        state.select_city(&city).await;

        assert_eq!(state.search_query(), "Seattle, Washington, USA");
        assert!(state.filtered_cities().is_empty());

        // idempotent in its state shape, regardless of prior search state
        state.change_search_query("nonsense");
        state.select_city(&city).await;
        assert_eq!(state.search_query(), "Seattle, Washington, USA");
        assert!(state.filtered_cities().is_empty());
    }

    #[tokio::test]
    async fn test_observers_see_loading_then_loaded() {
        let state = state();
        let seen: Arc<Mutex<Vec<StateSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        state.subscribe(Box::new(move |snapshot| {
            sink.lock().unwrap().push(snapshot.clone());
        }));

        state.load_forecast(20.0, 0.0).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_loading);
        assert!(seen[0].forecasts.is_empty());
        assert!(!seen[1].is_loading);
        assert_eq!(seen[1].forecasts.len(), 1);
    }
}
