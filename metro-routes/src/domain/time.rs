//! Time-of-day handling for transit itineraries.
//!
//! The Routes API reports per-step times as localized 12-hour strings
//! ("3:40 PM", sometimes with a narrow no-break space before the meridiem).
//! This module parses those strings and provides a validated 24-hour
//! time-of-day type with wrapping minute arithmetic.

use std::fmt;

use serde::Serialize;

/// Minutes in a day, for wrapping arithmetic.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid localized time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid localized time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// AM/PM marker of a 12-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A time of day on the 24-hour clock.
///
/// Carries no date: the itinerary output is a per-step time-of-day, and
/// arithmetic that crosses midnight wraps rather than rolling the day over.
///
/// # Examples
///
/// ```
/// use metro_routes::domain::TimeOfDay;
///
/// let t = TimeOfDay::new(23, 58).unwrap();
/// assert_eq!(t.add_minutes(5).to_string(), "00:03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Create a time of day, validating the hour and minute ranges.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Build a time of day from minutes past midnight, wrapping modulo 24h.
    ///
    /// Negative values wrap backwards: -1 is 23:59.
    pub fn from_minutes(total: i64) -> Self {
        let total = total.rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (total / 60) as u32,
            minute: (total % 60) as u32,
        }
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Add minutes, wrapping past midnight.
    ///
    /// Used for the walking buffer on arrival times: 23:58 plus 5 minutes
    /// is 00:03, with no day tracked.
    pub fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(i64::from(self.hour) * 60 + i64::from(self.minute) + minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A parsed localized 12-hour time: "H:MM" plus an AM/PM marker.
///
/// The upstream strings embed locale oddities between the minutes and the
/// meridiem (U+202F narrow no-break space is common), and may carry
/// trailing text after the marker. The parser requires the string to start
/// with the time and takes the last AM/PM marker it finds, but is otherwise
/// tolerant of the text in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl LocalizedTime {
    /// Parse a localized time string.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_routes::domain::{LocalizedTime, Meridiem};
    ///
    /// let t = LocalizedTime::parse("11:59\u{202f}PM").unwrap();
    /// assert_eq!(t.hour(), 11);
    /// assert_eq!(t.minute(), 59);
    /// assert_eq!(t.meridiem(), Meridiem::Pm);
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        // Hour: one or two leading digits.
        let mut digits = 0;
        while digits < bytes.len() && bytes[digits].is_ascii_digit() {
            digits += 1;
        }
        if digits == 0 || digits > 2 {
            return Err(TimeError::new(s, "expected one or two hour digits"));
        }
        let hour: u32 = s[..digits]
            .parse()
            .map_err(|_| TimeError::new(s, "invalid hour digits"))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new(s, "hour must be 1-12"));
        }

        if bytes.get(digits) != Some(&b':') {
            return Err(TimeError::new(s, "expected colon after hour"));
        }

        // Minute: exactly two digits after the colon.
        let m_start = digits + 1;
        let m_end = m_start + 2;
        if bytes.len() < m_end
            || !bytes[m_start].is_ascii_digit()
            || !bytes[m_start + 1].is_ascii_digit()
        {
            return Err(TimeError::new(s, "expected two minute digits"));
        }
        let minute: u32 = s[m_start..m_end]
            .parse()
            .map_err(|_| TimeError::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new(s, "minute must be 0-59"));
        }

        // Meridiem: last AM/PM marker anywhere in the remainder.
        let rest = &s[m_end..];
        let meridiem = match (rest.rfind("AM"), rest.rfind("PM")) {
            (None, None) => return Err(TimeError::new(s, "missing AM/PM marker")),
            (Some(_), None) => Meridiem::Am,
            (None, Some(_)) => Meridiem::Pm,
            (Some(a), Some(p)) => {
                if a > p {
                    Meridiem::Am
                } else {
                    Meridiem::Pm
                }
            }
        };

        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Returns the 12-hour clock hour (1-12).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the meridiem marker.
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Convert to the 24-hour clock.
    ///
    /// Handles the 12 o'clock edge explicitly: 12:xx AM is hour 0, and
    /// 12:xx PM stays hour 12.
    pub fn to_time_of_day(self) -> TimeOfDay {
        let hour = match self.meridiem {
            Meridiem::Am => self.hour % 12,
            Meridiem::Pm => self.hour % 12 + 12,
        };
        TimeOfDay { hour, minute: self.minute }
    }
}
