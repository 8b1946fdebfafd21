//! Forward geocoding: resolve a free-text place name to coordinates.
//! Uses the OpenCage geocoding API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{error::FetchError, model::Coordinates};

const OPENCAGE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Geocoder {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct OcGeometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OcResult {
    geometry: OcGeometry,
}

#[derive(Debug, Deserialize)]
struct OcResponse {
    results: Vec<OcResult>,
}

impl Geocoder {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENCAGE_URL.to_string())
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Resolve a city name to a coordinate pair.
    ///
    /// Zero candidates is a [`FetchError::NotFound`]; callers must not
    /// fall through to a weather lookup in that case.
    pub async fn resolve(&self, city: &str) -> Result<Coordinates, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .query(&[("q", city), ("key", self.api_key.as_str()), ("limit", "1")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::from_response(status.as_u16(), &body));
        }

        let parsed: OcResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("geocoding response: {e}")))?;

        let Some(first) = parsed.results.first() else {
            return Err(FetchError::NotFound(city.to_string()));
        };

        let coords = Coordinates { lat: first.geometry.lat, lon: first.geometry.lng };
        tracing::debug!(%city, lat = coords.lat, lon = coords.lon, "resolved place name");

        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_result_geometry() {
        let body = r#"{
            "results": [
                { "geometry": { "lat": 51.5074, "lng": -0.1278 } },
                { "geometry": { "lat": 42.983, "lng": -81.233 } }
            ]
        }"#;

        let parsed: OcResponse = serde_json::from_str(body).expect("valid payload");
        let first = parsed.results.first().expect("non-empty");
        assert_eq!(first.geometry.lat, 51.5074);
        assert_eq!(first.geometry.lng, -0.1278);
    }

    #[test]
    fn tolerates_extra_fields_in_payload() {
        let body = r#"{
            "documentation": "https://opencagedata.com/api",
            "results": [],
            "status": { "code": 200, "message": "OK" }
        }"#;

        let parsed: OcResponse = serde_json::from_str(body).expect("valid payload");
        assert!(parsed.results.is_empty());
    }
}
