//! Trip chaining over consecutive points of interest.
//!
//! A trip is an ordered list of stops, each with a planned local
//! departure time. The route for each hop runs from one stop to the
//! next, departing when the traveler leaves the earlier stop.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::TransitLeg;
use crate::gmaps::{RouteError, RoutesClient};

/// One stop on a planned trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStop {
    /// Free-text point of interest.
    pub location: String,
    /// When the traveler leaves this stop (local time).
    pub departure: NaiveDateTime,
}

impl TripStop {
    /// Convenience constructor.
    pub fn new(location: impl Into<String>, departure: NaiveDateTime) -> Self {
        Self {
            location: location.into(),
            departure,
        }
    }
}

/// The computed route for one hop of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRoute {
    /// Location text of the hop's origin.
    pub from: String,
    /// Location text of the hop's destination.
    pub to: String,
    /// Transit legs for the hop, in riding order.
    pub legs: Vec<TransitLeg>,
}

/// Compute routes between each consecutive pair of stops.
///
/// Each hop departs at the earlier stop's departure time. Fewer than two
/// stops yields an empty plan; a failure on any hop aborts the remainder.
pub async fn plan_trip(
    client: &RoutesClient,
    stops: &[TripStop],
) -> Result<Vec<TripRoute>, RouteError> {
    let mut routes = Vec::with_capacity(stops.len().saturating_sub(1));

    for pair in stops.windows(2) {
        let legs = client
            .compute_route(&pair[0].location, &pair[1].location, pair[0].departure)
            .await?;

        routes.push(TripRoute {
            from: pair[0].location.clone(),
            to: pair[1].location.clone(),
            legs,
        });
    }

    Ok(routes)
}
