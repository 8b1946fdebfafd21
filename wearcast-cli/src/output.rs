//! Terminal rendering for forecasts and recommendations.

use wearcast_core::{
    ForecastSample, ForecastSeries,
    recommend::{recommend_for_sample, shown},
    summarize,
};

/// Weather-card view of a single-sample series (current conditions).
pub fn print_current(series: &ForecastSeries) {
    let Some(sample) = series.current() else {
        println!("No weather data available.");
        return;
    };

    println!("{}", series.city_name);
    println!("{}", sample.weather_description);
    println!(
        "{}°C, feels like {}°C",
        sample.temperature_c.round(),
        sample.feels_like_c.round()
    );
    println!(
        "humidity {}%, wind {} m/s",
        sample.humidity_pct,
        sample.wind_speed.round()
    );
}

/// Forecast slots plus the derived clothing recommendation.
pub fn print_recommendation(series: &ForecastSeries) {
    let Some(current) = series.current() else {
        println!("No forecast data available.");
        return;
    };

    println!("Clothing recommendation for {}", series.city_name);
    println!();

    for (index, sample) in series.samples.iter().take(5).enumerate() {
        print_slot(index, sample);
    }
    println!();

    println!(
        "{} with {}% precipitation chance",
        current.weather_description,
        current.precipitation_pct().round()
    );

    let rec = recommend_for_sample(current);
    println!(
        "{}.",
        summarize(&rec, current.temperature_c, current.precipitation_pct(), current.wind_speed)
    );
    println!();

    for (label, items) in rec.categories() {
        let rendered = match shown(items) {
            [] => "-".to_string(),
            rest => rest.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        };
        println!("{label:<12} {rendered}");
    }
}

fn print_slot(index: usize, sample: &ForecastSample) {
    let time = if index == 0 {
        "Now".to_string()
    } else {
        sample.timestamp.format("%H:%M").to_string()
    };

    println!(
        "{time:<6} {:>4}°C  {:>3}%  {:>3} m/s",
        sample.temperature_c.round(),
        sample.precipitation_pct().round(),
        sample.wind_speed.round()
    );
}
