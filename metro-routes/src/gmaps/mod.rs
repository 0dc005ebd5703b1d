//! Google Maps route-computation client.
//!
//! This module talks to two Google endpoints: the Places find-place
//! text search (to resolve a free-text location to the nearest transit
//! station's address) and the Routes computeRoutes endpoint (to fetch a
//! transit itinerary between two addresses).
//!
//! Quirks of the Routes contract this module encodes:
//! - the field mask `routes.legs.steps.transitDetails` strips every
//!   other step field, so walking steps come back as empty objects
//! - per-step times are **localized 12-hour strings**, often with a
//!   narrow no-break space before the AM/PM marker
//! - errors ride inside the JSON body under an `error` key, sometimes
//!   on a 200 status; the body is always decoded before checking
//! - departure times are padded by an undocumented ~30 minutes, which
//!   the timestamp builder subtracts back out

mod client;
mod convert;
mod error;
mod timestamp;
pub mod types;

pub use client::{RoutesClient, RoutesConfig};
pub use convert::{NormalizeError, WALKING_BUFFER_MINUTES, normalize_route};
pub use error::RouteError;
pub use timestamp::{
    DEFAULT_DEPARTURE_BUFFER_MINUTES, DEFAULT_UTC_OFFSET_HOURS, in_us_dst_window, wire_timestamp,
};
