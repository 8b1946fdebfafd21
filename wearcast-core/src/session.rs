//! Latest-request-wins slot for the single displayed forecast.

use crate::model::ForecastSeries;

/// Identifies one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns the one mutable [`ForecastSeries`] slot.
///
/// Each fetch attempt takes a token from [`WeatherSession::begin`]; only
/// the attempt holding the newest token may publish or clear the slot.
/// A superseded response that arrives late is discarded, never applied.
#[derive(Debug, Default)]
pub struct WeatherSession {
    next_token: u64,
    latest_token: u64,
    current: Option<ForecastSeries>,
}

impl WeatherSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch attempt, superseding any in-flight one.
    pub fn begin(&mut self) -> RequestToken {
        self.next_token += 1;
        self.latest_token = self.next_token;
        RequestToken(self.next_token)
    }

    /// Publish a successful fetch.
    ///
    /// Returns false (dropping the series) when a newer request has been
    /// started since `token` was issued.
    pub fn complete(&mut self, token: RequestToken, series: ForecastSeries) -> bool {
        if token.0 != self.latest_token {
            return false;
        }

        self.current = Some(series);
        true
    }

    /// Record a failed fetch.
    ///
    /// Clears the slot only when the failure belongs to the newest
    /// request; a stale failure leaves the displayed series alone.
    pub fn fail(&mut self, token: RequestToken) -> bool {
        if token.0 != self.latest_token {
            return false;
        }

        self.current = None;
        true
    }

    /// The series currently on display, if any.
    pub fn latest(&self) -> Option<&ForecastSeries> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(city: &str) -> ForecastSeries {
        ForecastSeries { city_name: city.to_string(), samples: vec![] }
    }

    #[test]
    fn completed_fetch_is_visible() {
        let mut session = WeatherSession::new();
        let token = session.begin();

        assert!(session.complete(token, series("London")));
        assert_eq!(session.latest().map(|s| s.city_name.as_str()), Some("London"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = WeatherSession::new();

        let first = session.begin();
        let second = session.begin();

        assert!(session.complete(second, series("Paris")));
        // The first request resolves late; its result must not clobber
        // the newer one.
        assert!(!session.complete(first, series("London")));

        assert_eq!(session.latest().map(|s| s.city_name.as_str()), Some("Paris"));
    }

    #[test]
    fn replacement_is_wholesale() {
        let mut session = WeatherSession::new();

        let first = session.begin();
        assert!(session.complete(first, series("London")));

        let second = session.begin();
        assert!(session.complete(second, series("Paris")));

        assert_eq!(session.latest().map(|s| s.city_name.as_str()), Some("Paris"));
    }

    #[test]
    fn latest_failure_clears_the_slot() {
        let mut session = WeatherSession::new();

        let first = session.begin();
        assert!(session.complete(first, series("London")));

        let second = session.begin();
        assert!(session.fail(second));
        assert!(session.latest().is_none());
    }

    #[test]
    fn stale_failure_leaves_the_slot_alone() {
        let mut session = WeatherSession::new();

        let first = session.begin();
        let second = session.begin();

        assert!(session.complete(second, series("Paris")));
        assert!(!session.fail(first));
        assert_eq!(session.latest().map(|s| s.city_name.as_str()), Some("Paris"));
    }
}
