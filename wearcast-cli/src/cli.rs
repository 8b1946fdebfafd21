use anyhow::Context;
use clap::{Parser, Subcommand};

use wearcast_core::{Config, Coordinates, Fetcher, LocationQuery, ProviderId};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wearcast", version, about = "Weather lookup with clothing recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "opencage".
        provider: String,
    },

    /// Show the forecast and a clothing recommendation for a city.
    Recommend {
        /// City name, e.g. "London".
        city: String,
    },

    /// Show current weather for a city or a coordinate pair.
    Current {
        /// City name; geocoded unless --lat/--lon are given.
        city: Option<String>,

        /// Latitude, bypasses geocoding when paired with --lon.
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude, bypasses geocoding when paired with --lat.
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Recommend { city } => recommend(&city).await,
            Command::Current { city, lat, lon } => current(city, lat, lon).await,
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    let api_key = inquire::Password::new(&format!("API key for {id}:"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.upsert_provider_api_key(id, api_key);
    config.save()?;

    println!("Saved credentials for {id}.");
    Ok(())
}

async fn recommend(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let fetcher = Fetcher::from_config(&config)?;

    let series = fetcher.fetch_forecast(city).await?;
    output::print_recommendation(&series);

    Ok(())
}

async fn current(city: Option<String>, lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let query = match (city, lat, lon) {
        (_, Some(lat), Some(lon)) => LocationQuery::Coordinates(Coordinates { lat, lon }),
        (Some(city), _, _) => LocationQuery::City(city),
        _ => anyhow::bail!("Provide a city name, or both --lat and --lon."),
    };

    let config = Config::load()?;
    let fetcher = Fetcher::from_config(&config)?;

    let series = fetcher.fetch(&query).await?;
    output::print_current(&series);

    Ok(())
}
