//! Core library for the `wearcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Geocoding and weather-provider clients
//! - The clothing recommendation engine and its summary rendering
//!
//! It is used by `wearcast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod geocode;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod session;
pub mod summary;

pub use config::{Config, ProviderConfig, ProviderId};
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use geocode::Geocoder;
pub use model::{Coordinates, ForecastSample, ForecastSeries, LocationQuery};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use recommend::{ClothingItem, ClothingRecommendation, recommend, recommend_for_sample};
pub use session::{RequestToken, WeatherSession};
pub use summary::summarize;
