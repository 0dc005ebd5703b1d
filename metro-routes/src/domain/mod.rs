//! Domain types for the route-computation client.
//!
//! These types represent validated itinerary data: times of day that are
//! guaranteed in range, and the transit legs handed back to callers. The
//! raw API shapes live in `gmaps::types`; nothing here depends on the
//! wire format.

mod leg;
mod time;

pub use leg::{LegStop, LineInfo, TransitLeg};
pub use time::{LocalizedTime, Meridiem, TimeError, TimeOfDay};
