//! Conversion from Routes API step DTOs to domain transit legs.
//!
//! Takes the first leg of the first route, drops the empty objects the
//! field mask leaves where walking steps were, and turns each remaining
//! transit step into a [`TransitLeg`] with parsed times.

use crate::domain::{LegStop, LineInfo, LocalizedTime, TimeError, TransitLeg};

use super::types::{ComputeRoutesResponse, TransitDetails};

/// Padding added to arrival times for egress from the station.
pub const WALKING_BUFFER_MINUTES: i64 = 5;

/// Error during step normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A localized time string did not match the expected pattern
    #[error(transparent)]
    MalformedTime(#[from] TimeError),

    /// Missing required field in a transit step
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Normalize a raw routes response into an ordered leg list.
///
/// Absent routes or legs, and empty step arrays, normalize to an empty
/// vector. Steps without `transitDetails` are filtered out; the rest are
/// converted in order, so the output length equals the number of transit
/// steps in the first leg of the first route.
pub fn normalize_route(response: &ComputeRoutesResponse) -> Result<Vec<TransitLeg>, NormalizeError> {
    let steps = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .map(|leg| leg.steps.as_slice())
        .unwrap_or_default();

    steps
        .iter()
        .filter_map(|step| step.transit_details.as_ref())
        .map(convert_step)
        .collect()
}

/// Convert one transit step into a leg.
fn convert_step(details: &TransitDetails) -> Result<TransitLeg, NormalizeError> {
    let localized = details
        .localized_values
        .as_ref()
        .ok_or(NormalizeError::MissingField("localizedValues"))?;

    let departure_text = localized
        .departure_time
        .as_ref()
        .and_then(|t| t.time.as_ref())
        .and_then(|t| t.text.as_deref())
        .ok_or(NormalizeError::MissingField("localizedValues.departureTime"))?;
    let arrival_text = localized
        .arrival_time
        .as_ref()
        .and_then(|t| t.time.as_ref())
        .and_then(|t| t.text.as_deref())
        .ok_or(NormalizeError::MissingField("localizedValues.arrivalTime"))?;

    // Each time comes from its own string: the departure text never feeds
    // the arrival fields.
    let departure = LocalizedTime::parse(departure_text)?.to_time_of_day();
    let arrival = LocalizedTime::parse(arrival_text)?
        .to_time_of_day()
        .add_minutes(WALKING_BUFFER_MINUTES);

    let stops = details
        .stop_details
        .as_ref()
        .ok_or(NormalizeError::MissingField("stopDetails"))?;

    let departure_stop = stops
        .departure_stop
        .as_ref()
        .and_then(|s| s.name.clone())
        .unwrap_or_default();
    let arrival_stop = stops
        .arrival_stop
        .as_ref()
        .and_then(|s| s.name.clone())
        .unwrap_or_default();

    let line = details.transit_line.as_ref();

    Ok(TransitLeg {
        line: LineInfo {
            name: line.and_then(|l| l.name.clone()).unwrap_or_default(),
            color: line.and_then(|l| l.color.clone()).unwrap_or_default(),
            headsign: details.headsign.clone().unwrap_or_default(),
        },
        from: LegStop {
            name: departure_stop,
            time: departure,
        },
        to: LegStop {
            name: arrival_stop,
            time: arrival,
        },
    })
}
