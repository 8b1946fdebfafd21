//! Front door for weather lookups.
//!
//! Composes the geocoder and the weather provider behind one entry
//! point. Calls are sequenced: when a place name needs geocoding, the
//! weather call only starts once geocoding has resolved.

use crate::{
    config::{Config, ProviderId},
    error::FetchError,
    geocode::Geocoder,
    model::{ForecastSeries, LocationQuery},
    provider::{OpenWeatherProvider, WeatherProvider},
};

#[derive(Debug)]
pub struct Fetcher {
    geocoder: Option<Geocoder>,
    provider: Box<dyn WeatherProvider>,
}

impl Fetcher {
    /// Build from configuration.
    ///
    /// A missing weather credential fails here, before any network call.
    /// The geocoding credential is optional: only place-name lookups
    /// need it, and they fail at call time when it is absent.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let weather_key = config.resolve_api_key(ProviderId::OpenWeather)?;
        let geocoder = config.resolve_api_key(ProviderId::OpenCage).ok().map(Geocoder::new);

        Ok(Self { geocoder, provider: Box::new(OpenWeatherProvider::new(weather_key)) })
    }

    /// Assemble from explicit parts (used by tests and embedders).
    pub fn with_parts(geocoder: Option<Geocoder>, provider: Box<dyn WeatherProvider>) -> Self {
        Self { geocoder, provider }
    }

    /// Current weather for a location query.
    ///
    /// A city name is geocoded first; zero geocoding candidates surface
    /// as [`FetchError::NotFound`] without touching the weather endpoint.
    pub async fn fetch(&self, query: &LocationQuery) -> Result<ForecastSeries, FetchError> {
        match query {
            LocationQuery::City(name) => {
                let geocoder = self.geocoder.as_ref().ok_or_else(|| {
                    FetchError::Config(
                        "No API key configured for provider 'opencage'.\n\
                         Hint: run `wearcast configure opencage` or pass coordinates directly."
                            .to_string(),
                    )
                })?;

                let coords = geocoder.resolve(name).await?;
                self.provider.current_by_coordinates(coords).await
            }
            LocationQuery::Coordinates(coords) => {
                self.provider.current_by_coordinates(*coords).await
            }
        }
    }

    /// Forecast series for a city, queried by name on the forecast
    /// endpoint (no geocoding involved).
    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, FetchError> {
        self.provider.forecast_by_city(city).await
    }
}
