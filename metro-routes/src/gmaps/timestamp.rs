//! Departure timestamp construction for the Routes API.
//!
//! The API wants a Zulu ("Z"-suffixed UTC) timestamp. The conversion here
//! is deliberately crude, matching observed service behavior rather than a
//! proper timezone database:
//!
//! - a fixed hour offset approximates local-to-UTC (default 4, i.e. EDT;
//!   wrong during standard time, hence the DST-window check below)
//! - the service was observed to pad departures by 30 minutes, so that
//!   much is subtracted back out
//! - the hour wraps modulo 24 and the calendar date is emitted unchanged,
//!   so a late-night departure keeps its local date

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

/// Fixed local-to-UTC hour offset (EDT).
pub const DEFAULT_UTC_OFFSET_HOURS: i64 = 4;

/// Compensation for the routing service's undocumented departure padding.
pub const DEFAULT_DEPARTURE_BUFFER_MINUTES: i64 = 30;

/// Build the wire-format departure timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
///
/// The offset and buffer are combined as minutes-into-day arithmetic with
/// a euclidean remainder, so the minute borrow can never drive the hour
/// negative. Seconds are always zero.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use metro_routes::gmaps::wire_timestamp;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
/// let depart = date.and_time(NaiveTime::from_hms_opt(14, 45, 0).unwrap());
/// assert_eq!(wire_timestamp(depart, 4, 30), "2026-08-08T18:15:00Z");
/// ```
pub fn wire_timestamp(
    departure: NaiveDateTime,
    utc_offset_hours: i64,
    departure_buffer_minutes: i64,
) -> String {
    let minutes_into_day =
        i64::from(departure.hour()) * 60 + i64::from(departure.minute());
    let adjusted = (minutes_into_day + utc_offset_hours * 60 - departure_buffer_minutes)
        .rem_euclid(24 * 60);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00Z",
        departure.year(),
        departure.month(),
        departure.day(),
        adjusted / 60,
        adjusted % 60,
    )
}

/// Whether a date falls inside the US daylight-saving window
/// (second Sunday of March through, exclusive, the first Sunday of
/// November).
///
/// The fixed offset in [`DEFAULT_UTC_OFFSET_HOURS`] assumes daylight
/// time; outside this window it is off by an hour, and callers log a
/// warning.
pub fn in_us_dst_window(date: NaiveDate) -> bool {
    let march = NaiveDate::from_ymd_opt(date.year(), 3, 8);
    let november = NaiveDate::from_ymd_opt(date.year(), 11, 1);
    let (Some(march_8), Some(nov_1)) = (march, november) else {
        // Unreachable for representable years; treat as in-window.
        return true;
    };

    // Second Sunday of March is the first Sunday on or after March 8.
    let dst_start = first_sunday_on_or_after(march_8);
    let dst_end = first_sunday_on_or_after(nov_1);

    date >= dst_start && date < dst_end
}

fn first_sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    let days_past_sunday = i64::from(date.weekday().num_days_from_sunday());
    date + Duration::days((7 - days_past_sunday) % 7)
}
