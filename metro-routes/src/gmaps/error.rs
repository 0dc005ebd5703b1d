//! Route client error types.

use super::convert::NormalizeError;

/// Errors from the route-computation client.
///
/// Callers branch on the variant; upstream error bodies keep their
/// `{code, message}` pair intact rather than being flattened to text.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with no recognizable Google error body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The place-search service reported an error
    #[error("place search failed with code {code}: {message}")]
    Geocode { code: i64, message: String },

    /// The routing service reported an error
    #[error("route computation failed with code {code}: {message}")]
    RouteFetch { code: i64, message: String },

    /// The place search returned no usable candidate
    #[error("no place candidate found for {query:?}")]
    NoCandidateFound { query: String },

    /// A location query was empty or whitespace-only
    #[error("location must not be empty")]
    EmptyLocation,

    /// A step in the routing response could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
