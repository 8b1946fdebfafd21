use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::FetchError,
    model::{Coordinates, ForecastSeries},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Abstraction over the weather endpoints the application consumes.
///
/// Both operations return a normalized [`ForecastSeries`]: a series of
/// one for current conditions, at least five chronological samples for a
/// forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a resolved coordinate pair.
    async fn current_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<ForecastSeries, FetchError>;

    /// Forecast looked up directly by free-text city name.
    async fn forecast_by_city(&self, city: &str) -> Result<ForecastSeries, FetchError>;
}
