use thiserror::Error;

/// Errors surfaced by the fetch boundary.
///
/// Nothing here is retried: a failed fetch is reported to the caller
/// immediately and the user retries by resubmitting a location.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A required credential is missing. Raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// The transport call itself failed (offline, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("service error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Geocoding produced zero candidates for the query.
    #[error("no results found for '{0}'")]
    NotFound(String),

    /// The response body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Build an [`FetchError::Api`] from a non-success response.
    ///
    /// OpenWeather and OpenCage both report failures as JSON with a
    /// `message` field; when the body has one it is surfaced verbatim,
    /// otherwise the (truncated) raw body stands in.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "request failed".to_string()
                } else {
                    truncate_body(body)
                }
            });

        FetchError::Api { status, message }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
