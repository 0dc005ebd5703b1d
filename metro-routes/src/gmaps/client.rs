//! Google Maps HTTP client.
//!
//! Wraps the Places find-place endpoint (station resolution) and the
//! Routes computeRoutes endpoint (transit directions), and strings them
//! together into the route-computation pipeline.

use chrono::NaiveDateTime;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::domain::TransitLeg;

use super::convert::normalize_route;
use super::error::RouteError;
use super::timestamp::{
    DEFAULT_DEPARTURE_BUFFER_MINUTES, DEFAULT_UTC_OFFSET_HOURS, in_us_dst_window, wire_timestamp,
};
use super::types::{
    ComputeRoutesRequest, ComputeRoutesResponse, ErrorEnvelope, FindPlaceResponse,
    TransitPreferences, Waypoint,
};

/// Default base URL for the Places API.
const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Default base URL for the Routes API.
const DEFAULT_ROUTES_BASE_URL: &str = "https://routes.googleapis.com";

/// Field mask restricting computeRoutes responses to transit step detail.
const ROUTES_FIELD_MASK: &str = "routes.legs.steps.transitDetails";

/// Default phrasing used to steer place search toward a station.
const DEFAULT_STATION_QUERY_PREFIX: &str = "Closest transit station to";

/// Fields requested from the find-place endpoint.
const PLACE_FIELDS: &str = "formatted_address,name,types";

/// Configuration for the routes client.
#[derive(Debug, Clone)]
pub struct RoutesConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL for the Places API (override for testing)
    pub places_base_url: String,
    /// Base URL for the Routes API (override for testing)
    pub routes_base_url: String,
    /// Prefix prepended to location text when resolving a station
    pub station_query_prefix: String,
    /// Fixed local-to-UTC hour offset applied to departure times
    pub utc_offset_hours: i64,
    /// Minutes subtracted to cancel the service's departure padding
    pub departure_buffer_minutes: i64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            routes_base_url: DEFAULT_ROUTES_BASE_URL.to_string(),
            station_query_prefix: DEFAULT_STATION_QUERY_PREFIX.to_string(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            departure_buffer_minutes: DEFAULT_DEPARTURE_BUFFER_MINUTES,
            timeout_secs: 30,
        }
    }

    /// Set a custom Places base URL (for testing).
    pub fn with_places_base_url(mut self, url: impl Into<String>) -> Self {
        self.places_base_url = url.into();
        self
    }

    /// Set a custom Routes base URL (for testing).
    pub fn with_routes_base_url(mut self, url: impl Into<String>) -> Self {
        self.routes_base_url = url.into();
        self
    }

    /// Set the station query prefix.
    pub fn with_station_query_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.station_query_prefix = prefix.into();
        self
    }

    /// Set the fixed local-to-UTC hour offset.
    pub fn with_utc_offset_hours(mut self, hours: i64) -> Self {
        self.utc_offset_hours = hours;
        self
    }

    /// Set the departure buffer compensation.
    pub fn with_departure_buffer_minutes(mut self, minutes: i64) -> Self {
        self.departure_buffer_minutes = minutes;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for computing metro routes between free-text locations.
///
/// Holds a `reqwest::Client` and immutable configuration; nothing is
/// mutated or cached across calls, so each invocation is independent.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    config: RoutesConfig,
}

impl RoutesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutesConfig) -> Result<Self, RouteError> {
        let mut headers = HeaderMap::new();

        // The Routes API authenticates via this header; the Places API
        // takes the key as a query parameter and ignores it.
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| RouteError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("X-Goog-Api-Key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Resolve free-text location to the formatted address of the nearest
    /// transit station.
    ///
    /// Issues a find-place text query of the form
    /// `"{prefix} {location}"` and returns the first candidate's
    /// formatted address.
    ///
    /// # Errors
    ///
    /// `EmptyLocation` for blank input, `Geocode` when the service
    /// reports an error, `NoCandidateFound` when the candidate list is
    /// empty or the first candidate carries no address.
    pub async fn find_station(&self, location: &str) -> Result<String, RouteError> {
        if location.trim().is_empty() {
            return Err(RouteError::EmptyLocation);
        }

        let url = format!("{}/findplacefromtext/json", self.config.places_base_url);
        let query = format!("{} {}", self.config.station_query_prefix, location);

        debug!(%location, "resolving station address");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("input", query.as_str()),
                ("inputtype", "textquery"),
                ("fields", PLACE_FIELDS),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_status(&body, status, ErrorKind::Geocode));
        }

        let parsed: FindPlaceResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if let Some(err) = parsed.error {
            return Err(RouteError::Geocode {
                code: err.code,
                message: err.message,
            });
        }

        parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.formatted_address.clone())
            .ok_or_else(|| RouteError::NoCandidateFound {
                query: location.to_string(),
            })
    }

    /// Fetch the raw transit route between two resolved addresses.
    ///
    /// Restricts the response to `routes.legs.steps.transitDetails` via
    /// the field mask and the allowed travel modes to subway and train.
    pub async fn fetch_route_raw(
        &self,
        origin: &str,
        destination: &str,
        departure_time: &str,
    ) -> Result<ComputeRoutesResponse, RouteError> {
        let url = format!(
            "{}/directions/v2:computeRoutes",
            self.config.routes_base_url
        );

        let request = ComputeRoutesRequest {
            origin: Waypoint {
                address: origin.to_string(),
            },
            destination: Waypoint {
                address: destination.to_string(),
            },
            travel_mode: "TRANSIT",
            departure_time: departure_time.to_string(),
            transit_preferences: TransitPreferences {
                allowed_travel_modes: vec!["SUBWAY", "TRAIN"],
            },
        };

        debug!(%origin, %destination, %departure_time, "fetching route");

        let response = self
            .http
            .post(&url)
            .header("X-Goog-FieldMask", ROUTES_FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_status(&body, status, ErrorKind::RouteFetch));
        }

        let parsed: ComputeRoutesResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        // The error field lives in the decoded body; a 200 status does
        // not guarantee a usable route.
        if let Some(err) = parsed.error {
            return Err(RouteError::RouteFetch {
                code: err.code,
                message: err.message,
            });
        }

        Ok(parsed)
    }

    /// Compute the transit legs from `start` to `end`, departing at the
    /// given local time.
    ///
    /// Runs the full pipeline sequentially: resolve both endpoints to
    /// station addresses, build the wire timestamp, fetch the route, and
    /// normalize its steps. A failure at any stage aborts the rest.
    pub async fn compute_route(
        &self,
        start: &str,
        end: &str,
        departure: NaiveDateTime,
    ) -> Result<Vec<TransitLeg>, RouteError> {
        let origin = self.find_station(start).await?;
        let destination = self.find_station(end).await?;

        if !in_us_dst_window(departure.date()) {
            warn!(
                date = %departure.date(),
                offset_hours = self.config.utc_offset_hours,
                "departure is outside the US DST window; the fixed UTC offset is likely off by an hour"
            );
        }

        let departure_time = wire_timestamp(
            departure,
            self.config.utc_offset_hours,
            self.config.departure_buffer_minutes,
        );

        let raw = self
            .fetch_route_raw(&origin, &destination, &departure_time)
            .await?;

        let legs = normalize_route(&raw)?;
        debug!(count = legs.len(), "normalized transit legs");
        Ok(legs)
    }
}

/// Which upstream service an error body should be attributed to.
enum ErrorKind {
    Geocode,
    RouteFetch,
}

/// Map a non-success response to a structured error, preferring the
/// Google error envelope when the body carries one.
fn error_from_status(body: &str, status: reqwest::StatusCode, kind: ErrorKind) -> RouteError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return match kind {
            ErrorKind::Geocode => RouteError::Geocode {
                code: envelope.error.code,
                message: envelope.error.message,
            },
            ErrorKind::RouteFetch => RouteError::RouteFetch {
                code: envelope.error.code,
                message: envelope.error.message,
            },
        };
    }

    RouteError::Api {
        status: status.as_u16(),
        message: body.chars().take(500).collect(),
    }
}
