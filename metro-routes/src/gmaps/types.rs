//! Google Places / Routes API DTOs.
//!
//! These types map directly to the JSON shapes of the find-place and
//! computeRoutes endpoints. Response fields use `Option` liberally: the
//! field mask strips everything outside `routes.legs.steps.transitDetails`,
//! and walking steps arrive as empty objects.

use serde::{Deserialize, Serialize};

/// The `{code, message}` object Google nests under an `error` key.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
    /// Symbolic status such as "PERMISSION_DENIED".
    pub status: Option<String>,
}

/// Envelope for probing a non-2xx body for a Google error object.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

// --- Find Place (text query) ---

/// Response from the find-place-from-text endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    pub error: Option<ApiErrorBody>,
}

/// One place candidate, restricted by the requested fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlaceCandidate {
    pub formatted_address: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

// --- computeRoutes request ---

/// Body of a computeRoutes request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: &'static str,
    /// Zulu wire timestamp, e.g. "2026-08-08T18:15:00Z".
    pub departure_time: String,
    pub transit_preferences: TransitPreferences,
}

/// Address-form waypoint.
#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub address: String,
}

/// Restricts which transit vehicle classes the route may use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitPreferences {
    pub allowed_travel_modes: Vec<&'static str>,
}

// --- computeRoutes response ---

/// Response from computeRoutes, as reduced by the field mask.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    pub error: Option<ApiErrorBody>,
}

/// One computed route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// One leg of a route (origin to destination; steps inside).
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

/// One step. Walking steps have no `transitDetails` and deserialize from
/// the empty objects the field mask leaves behind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub transit_details: Option<TransitDetails>,
}

/// Transit-specific detail of a step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitDetails {
    pub stop_details: Option<StopDetails>,
    pub localized_values: Option<LocalizedValues>,
    pub transit_line: Option<TransitLine>,
    pub headsign: Option<String>,
}

/// Boarding and alighting stops of a step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetails {
    pub departure_stop: Option<TransitStop>,
    pub arrival_stop: Option<TransitStop>,
}

/// A named transit stop.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitStop {
    pub name: Option<String>,
}

/// Localized display strings for a step's times.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedValues {
    pub departure_time: Option<LocalizedDateTime>,
    pub arrival_time: Option<LocalizedDateTime>,
}

/// A localized datetime; only the time text is used.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedDateTime {
    pub time: Option<LocalizedText>,
}

/// Localized display text.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub text: Option<String>,
}

/// The transit line a step rides.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitLine {
    pub name: Option<String>,
    pub color: Option<String>,
}
