use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bikeday::{AppState, BikeDayConfig, City, GeocodingClient, ScoreBucket, TemperatureUnit};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut unit = TemperatureUnit::Celsius;
    let mut query_parts = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--fahrenheit" {
            unit = TemperatureUnit::Fahrenheit;
        } else {
            query_parts.push(arg);
        }
    }
    let query = if query_parts.is_empty() {
        "San Francisco".to_string()
    } else {
        query_parts.join(" ")
    };

    let config = BikeDayConfig::from_env();
    let state = AppState::open_meteo(&config)?;
    state.set_temperature_unit(unit);

    // Catalog first, geocoding only for places the catalog does not know
    state.change_search_query(&query);
    let city = match state.filtered_cities().into_iter().next() {
        Some(city) => city,
        None => {
            info!("No catalog match for '{query}', trying geocoding");
            let geocoder = GeocodingClient::new(&config)?;
            let results = geocoder.search(&query).await?;
            let best = results
                .into_iter()
                .next()
                .with_context(|| format!("no location found for '{query}'"))?;
            City::from(best)
        }
    };

    info!("Loading forecast for {}", city.display_name());
    state.select_city(&city).await;

    render(&state);
    Ok(())
}

/// Render exactly one of the four mutually exclusive views:
/// loading, error, forecast list, or empty.
fn render(state: &AppState) {
    let snapshot = state.snapshot();
    if snapshot.is_loading {
        println!("Loading forecast...");
    } else if let Some(error) = snapshot.error {
        println!("Error: {error}");
    } else if snapshot.forecasts.is_empty() {
        println!("No forecast available.");
    } else {
        println!("Best bike days for {}:", snapshot.search_query);
        for day in &snapshot.forecasts {
            println!(
                "  {}  score {:>3} ({:?})  {} / {}  rain {:>3}%  wind {:.1} m/s",
                day.date,
                day.bike_score,
                ScoreBucket::for_score(day.bike_score),
                snapshot.selected_unit.format(day.max_temp),
                snapshot.selected_unit.format(day.min_temp),
                day.precipitation_probability,
                day.wind_speed
            );
        }
    }
}
