use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Coordinates, ForecastSample, ForecastSeries},
};

use super::WeatherProvider;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%path, "requesting OpenWeather endpoint");

        let res = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .query(query)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::from_response(status.as_u16(), &body));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    /// Probability of precipitation, 0–1. Absent on some payloads.
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn weather_fields(weather: &[OwWeather]) -> (String, String) {
    match weather.first() {
        Some(w) => (w.description.clone(), w.main.clone()),
        None => ("Unknown".to_string(), "Unknown".to_string()),
    }
}

fn sample_from_entry(entry: &OwForecastEntry) -> ForecastSample {
    let (weather_description, weather_main) = weather_fields(&entry.weather);

    ForecastSample {
        timestamp: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
        temperature_c: entry.main.temp,
        feels_like_c: entry.main.feels_like,
        min_temp_c: entry.main.temp_min,
        max_temp_c: entry.main.temp_max,
        humidity_pct: entry.main.humidity,
        precipitation_probability: entry.pop,
        wind_speed: entry.wind.speed,
        weather_description,
        weather_main,
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<ForecastSeries, FetchError> {
        let lat = coords.lat.to_string();
        let lon = coords.lon.to_string();

        let body = self.get("weather", &[("lat", lat.as_str()), ("lon", lon.as_str())]).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("current weather response: {e}")))?;

        let (weather_description, weather_main) = weather_fields(&parsed.weather);

        // The current-weather payload carries no precipitation
        // probability; it normalizes to zero.
        let sample = ForecastSample {
            timestamp: unix_to_utc(parsed.dt).unwrap_or_else(Utc::now),
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            min_temp_c: parsed.main.temp_min,
            max_temp_c: parsed.main.temp_max,
            humidity_pct: parsed.main.humidity,
            precipitation_probability: 0.0,
            wind_speed: parsed.wind.speed,
            weather_description,
            weather_main,
        };

        Ok(ForecastSeries { city_name: parsed.name, samples: vec![sample] })
    }

    async fn forecast_by_city(&self, city: &str) -> Result<ForecastSeries, FetchError> {
        let body = self.get("forecast", &[("q", city)]).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("forecast response: {e}")))?;

        if parsed.list.is_empty() {
            return Err(FetchError::Parse("forecast response contained no samples".to_string()));
        }

        let samples = parsed.list.iter().map(sample_from_entry).collect();

        tracing::debug!(city = %parsed.city.name, "normalized forecast series");

        Ok(ForecastSeries { city_name: parsed.city.name, samples })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_entry_defaults_missing_pop_to_zero() {
        let body = r#"{
            "dt": 1700000000,
            "main": { "temp": 9.5, "feels_like": 8.0, "temp_min": 9.0, "temp_max": 10.0, "humidity": 81 },
            "weather": [{ "description": "light rain", "main": "Rain" }],
            "wind": { "speed": 4.2 }
        }"#;

        let entry: OwForecastEntry = serde_json::from_str(body).expect("valid entry");
        assert_eq!(entry.pop, 0.0);

        let sample = sample_from_entry(&entry);
        assert_eq!(sample.precipitation_probability, 0.0);
        assert_eq!(sample.weather_description, "light rain");
        assert_eq!(sample.weather_main, "Rain");
    }

    #[test]
    fn sample_timestamp_comes_from_entry() {
        let entry = OwForecastEntry {
            dt: 1_700_000_000,
            main: OwMain {
                temp: 1.0,
                feels_like: -2.0,
                temp_min: 0.0,
                temp_max: 2.0,
                humidity: 90,
            },
            weather: vec![],
            wind: OwWind { speed: 7.0 },
            pop: 0.6,
        };

        let sample = sample_from_entry(&entry);
        assert_eq!(sample.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(sample.weather_description, "Unknown");
    }
}
