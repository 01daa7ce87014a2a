//! City model and the built-in search catalog

use serde::{Deserialize, Serialize};

/// A selectable city with coordinates for forecast lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    /// City name
    pub name: String,
    /// Administrative region (state, province, ...)
    pub region: String,
    /// Country name
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl City {
    /// Create a new city
    #[must_use]
    pub fn new(name: &str, region: &str, country: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            region: region.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
        }
    }

    /// Name as shown in search results: "name, region, country"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}, {}", self.name, self.region, self.country)
    }
}

/// The fixed built-in city catalog, available without any I/O.
///
/// Order is significant: search filtering preserves it, US cities first.
#[must_use]
pub fn city_catalog() -> Vec<City> {
    vec![
        // United States
        City::new("New York", "New York", "USA", 40.7128, -74.0060),
        City::new("Los Angeles", "California", "USA", 34.0522, -118.2437),
        City::new("San Francisco", "California", "USA", 37.7749, -122.4194),
        City::new("Chicago", "Illinois", "USA", 41.8781, -87.6298),
        City::new("Miami", "Florida", "USA", 25.7617, -80.1918),
        City::new("Seattle", "Washington", "USA", 47.6062, -122.3321),
        City::new("Denver", "Colorado", "USA", 39.7392, -104.9903),
        City::new("Boston", "Massachusetts", "USA", 42.3601, -71.0589),
        City::new("Portland", "Oregon", "USA", 45.5155, -122.6789),
        City::new("Austin", "Texas", "USA", 30.2672, -97.7431),
        // International
        City::new("London", "England", "United Kingdom", 51.5074, -0.1278),
        City::new("Tokyo", "Tokyo", "Japan", 35.6762, 139.6503),
        City::new("Paris", "Île-de-France", "France", 48.8566, 2.3522),
        City::new("Sydney", "New South Wales", "Australia", -33.8688, 151.2093),
        City::new("Berlin", "Berlin", "Germany", 52.5200, 13.4050),
        City::new("Vancouver", "British Columbia", "Canada", 49.2827, -123.1207),
        City::new("Barcelona", "Catalonia", "Spain", 41.3851, 2.1734),
        City::new("Amsterdam", "North Holland", "Netherlands", 52.3676, 4.9041),
        City::new("Singapore", "Singapore", "Singapore", 1.3521, 103.8198),
        City::new("Dubai", "Dubai", "UAE", 25.2048, 55.2708),
    ]
}
