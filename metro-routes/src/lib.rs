//! Metro trip route computation.
//!
//! Resolves free-text places to nearby transit stations, queries the
//! Google Routes API for a subway/train itinerary between them, and
//! normalizes the localized per-step times into a clean leg list for the
//! surrounding trip-planning application.

pub mod domain;
pub mod gmaps;
pub mod trip;
