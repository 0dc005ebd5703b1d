//! Transit leg output types.
//!
//! A `TransitLeg` is one segment of a metro itinerary (one ride on one
//! line), produced in step order by the route normalizer. These are the
//! values handed back to the surrounding application, so they serialize
//! with serde.

use serde::Serialize;

use super::TimeOfDay;

/// One transit ride: the line taken, where to board, and where to alight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitLeg {
    /// The line this leg rides.
    pub line: LineInfo,
    /// Boarding stop; `time` is the estimated departure.
    pub from: LegStop,
    /// Alighting stop; `time` is the estimated arrival, padded with the
    /// walking buffer for egress from the station.
    pub to: LegStop,
}

/// Identifying information for a transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    /// Line name (e.g. "Silver Line").
    pub name: String,
    /// Line color as a hex string (e.g. "#a1a3a1").
    pub color: String,
    /// Direction shown on the vehicle.
    pub headsign: String,
}

/// A stop paired with an estimated time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegStop {
    /// Station name.
    pub name: String,
    /// Estimated departure (for `from`) or arrival (for `to`).
    pub time: TimeOfDay,
}
