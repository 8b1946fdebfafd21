//! One-sentence, human-readable summary of a recommendation.

use crate::recommend::{ClothingItem, ClothingRecommendation, shown};

fn join_items(items: &[ClothingItem]) -> String {
    match shown(items) {
        [] => "whatever is comfortable".to_string(),
        [only] => only.to_string(),
        [first, second, ..] => format!("{first} or {second}"),
    }
}

/// Build the recommendation sentence for one sample's readings.
///
/// The base clause names the top and bottom picks; reason clauses append
/// in a fixed order (cold, precipitation, wind) and several can apply at
/// once.
pub fn summarize(
    rec: &ClothingRecommendation,
    temp_c: f64,
    precip_pct: f64,
    wind_speed: f64,
) -> String {
    let mut sentence = format!(
        "Wearing a {} with {} is recommended",
        join_items(&rec.top),
        join_items(&rec.bottom),
    );

    if temp_c < 0.0 {
        sentence.push_str(" due to extremely low temperatures");
    } else if temp_c < 10.0 {
        sentence.push_str(" due to low temperatures");
    }

    if precip_pct > 30.0 {
        sentence.push_str(" due to precipitation");
    }

    if wind_speed > 15.0 {
        sentence.push_str(" due to high wind speeds");
    }

    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::recommend;

    #[test]
    fn mild_weather_has_no_reason_clause() {
        let rec = recommend(20.0, 0.0, 0.0);
        let sentence = summarize(&rec, 20.0, 0.0, 0.0);

        assert_eq!(sentence, "Wearing a Tshirt with Shorts is recommended");
    }

    #[test]
    fn cool_weather_names_low_temperatures() {
        let rec = recommend(5.0, 0.0, 0.0);
        let sentence = summarize(&rec, 5.0, 0.0, 0.0);

        assert_eq!(
            sentence,
            "Wearing a Hoodie or Windbreaker with Joggers is recommended \
             due to low temperatures"
        );
    }

    #[test]
    fn clauses_concatenate_in_fixed_order() {
        let rec = recommend(-5.0, 50.0, 20.0);
        let sentence = summarize(&rec, -5.0, 50.0, 20.0);

        assert_eq!(
            sentence,
            "Wearing a Thick Jacket or Hoodie with Thick Trousers or Joggers is recommended \
             due to extremely low temperatures due to precipitation due to high wind speeds"
        );
    }

    #[test]
    fn freezing_clause_replaces_low_temperature_clause() {
        let rec = recommend(-1.0, 0.0, 0.0);
        let sentence = summarize(&rec, -1.0, 0.0, 0.0);

        assert!(sentence.contains("extremely low temperatures"));
        assert!(!sentence.contains(" due to low temperatures"));
    }
}
