use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Where to look up weather: a free-text place name (geocoded first) or
/// an already-resolved coordinate pair.
#[derive(Debug, Clone)]
pub enum LocationQuery {
    City(String),
    Coordinates(Coordinates),
}

/// One timestamped weather reading, normalized from a provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub humidity_pct: u8,
    /// Probability of precipitation in the 0–1 range.
    pub precipitation_probability: f64,
    pub wind_speed: f64,
    pub weather_description: String,
    pub weather_main: String,
}

impl ForecastSample {
    /// Precipitation probability as a percentage, the unit the
    /// recommendation thresholds are written in.
    pub fn precipitation_pct(&self) -> f64 {
        self.precipitation_probability * 100.0
    }
}

/// Chronological forecast snapshot for one resolved location.
///
/// A series is immutable once built; a new search replaces it wholesale
/// rather than merging into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub city_name: String,
    pub samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    /// The sample closest to now, the one driving the recommendation.
    pub fn current(&self) -> Option<&ForecastSample> {
        self.samples.first()
    }
}
