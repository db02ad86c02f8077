//! Temporal algebra for trip and event scheduling.
//!
//! A [`TimeInterval`] is an ordered pair of civil (timezone-free) instants,
//! each combining a calendar date with a time of day. The predicates here
//! drive scheduling validation: containment checks for events inside their
//! trip, open-overlap conflict detection between events, and calendar date
//! enumeration for day-by-day views.
//!
//! All operations are pure and non-blocking. Both endpoints are assumed to
//! share one implicit calendar frame; no timezone conversion is performed
//! anywhere in this module.
//!
//! # Boundary semantics
//!
//! - Containment ([`TimeInterval::is_within`]) is inclusive on both
//!   boundaries: an interval is within itself.
//! - Conflict ([`TimeInterval::conflicts_with`]) is an *open* overlap:
//!   intervals that merely touch at an endpoint do not conflict.
//!
//! # Examples
//!
//! ```rust
//! use wayfare_core::interval::{self, TimeInterval};
//!
//! # fn example() -> wayfare_core::Result<()> {
//! let trip = TimeInterval::new(
//!     interval::date(2025, 7, 1)?,
//!     interval::time(9, 0, 0)?,
//!     interval::date(2025, 7, 10)?,
//!     interval::time(17, 0, 0)?,
//! )?;
//!
//! let museum = TimeInterval::new(
//!     interval::date(2025, 7, 3)?,
//!     interval::time(10, 0, 0)?,
//!     interval::date(2025, 7, 3)?,
//!     interval::time(12, 0, 0)?,
//! )?;
//!
//! assert!(museum.is_within(&trip));
//! assert_eq!(trip.all_dates().len(), 10);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Constructs a calendar date, rejecting out-of-range components.
pub fn date(year: i16, month: i8, day: i8) -> Result<Date> {
    Date::new(year, month, day)
        .map_err(|e| StoreError::validation("date").with_reason(e.to_string()))
}

/// Constructs a time of day, rejecting out-of-range components.
pub fn time(hour: i8, minute: i8, second: i8) -> Result<Time> {
    Time::new(hour, minute, second, 0)
        .map_err(|e| StoreError::validation("time").with_reason(e.to_string()))
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<Date> {
    input
        .parse::<Date>()
        .map_err(|e| StoreError::validation("date").with_reason(e.to_string()))
}

/// Parses a time of day (`HH:MM` or `HH:MM:SS`).
pub fn parse_time(input: &str) -> Result<Time> {
    input
        .parse::<Time>()
        .map_err(|e| StoreError::validation("time").with_reason(e.to_string()))
}

/// The scheduled span of a trip or event.
///
/// Endpoints are stored as separate date and time-of-day components, the way
/// they arrive from forms and APIs, and compared as combined civil
/// date-times. Construction through [`TimeInterval::new`] guarantees
/// `start <= end`, so every predicate below is correct by invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start_date: Date,
    pub start_time: Time,
    pub end_date: Date,
    pub end_time: Time,
}

impl TimeInterval {
    /// Creates an interval from its endpoint components.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the combined start instant is
    /// after the combined end instant.
    pub fn new(start_date: Date, start_time: Time, end_date: Date, end_time: Time) -> Result<Self> {
        let interval = Self {
            start_date,
            start_time,
            end_date,
            end_time,
        };
        if interval.start_datetime() > interval.end_datetime() {
            return Err(StoreError::validation("interval").with_reason(format!(
                "start {} is after end {}",
                interval.start_datetime(),
                interval.end_datetime()
            )));
        }
        Ok(interval)
    }

    /// The combined start instant.
    pub fn start_datetime(&self) -> DateTime {
        self.start_date.to_datetime(self.start_time)
    }

    /// The combined end instant.
    pub fn end_datetime(&self) -> DateTime {
        self.end_date.to_datetime(self.end_time)
    }

    /// Returns true when this interval lies entirely inside `other`,
    /// boundaries inclusive. Not symmetric: containment direction matters.
    pub fn is_within(&self, other: &TimeInterval) -> bool {
        self.start_datetime() >= other.start_datetime()
            && self.end_datetime() <= other.end_datetime()
    }

    /// Returns true when this interval completely contains `other`.
    ///
    /// Convenience equal to `other.is_within(self)`.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        other.is_within(self)
    }

    /// Returns true when the two intervals share any open overlap.
    ///
    /// Touching endpoints (`self.end == other.start`) do not count as a
    /// conflict. Symmetric with respect to swapping operands.
    pub fn conflicts_with(&self, other: &TimeInterval) -> bool {
        self.start_datetime() < other.end_datetime()
            && other.start_datetime() < self.end_datetime()
    }

    /// Returns true when the calendar date falls between the start and end
    /// dates, inclusive.
    pub fn contains_date(&self, date: Date) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true when the civil instant falls inside the interval,
    /// boundaries inclusive.
    pub fn contains_datetime(&self, datetime: DateTime) -> bool {
        datetime >= self.start_datetime() && datetime <= self.end_datetime()
    }

    /// Returns true when any portion of this interval falls on the given
    /// calendar date.
    ///
    /// More precise than [`TimeInterval::contains_date`] for partial-day
    /// spans: an interval ending at 01:00 on a date overlaps that date even
    /// though it started the day before.
    pub fn overlaps_date(&self, date: Date) -> bool {
        let day_start = date.to_datetime(Time::MIN);
        let day_end = date.to_datetime(Time::MAX);
        self.start_datetime() <= day_end && self.end_datetime() >= day_start
    }

    /// All calendar dates this interval spans, ascending and inclusive of
    /// both endpoints' dates.
    ///
    /// A single-day interval yields exactly one date. The result is a plain
    /// value, restartable by the caller at will.
    pub fn all_dates(&self) -> Vec<Date> {
        let mut dates = Vec::new();
        let mut current = self.start_date;
        while current <= self.end_date {
            dates.push(current);
            let Ok(next) = current.tomorrow() else {
                break;
            };
            current = next;
        }
        dates
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start_datetime().strftime("%Y-%m-%d %H:%M"),
            self.end_datetime().strftime("%Y-%m-%d %H:%M")
        )
    }
}
