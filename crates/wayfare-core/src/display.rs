//! Display wrappers for contextual formatting.
//!
//! Domain models format themselves through `Display`; the wrappers here
//! provide the contextual variants (lists, day-by-day schedules, operation
//! results) so the same data can be rendered differently depending on
//! where it appears, while every surface stays markdown.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{Event, Trip};

/// Formats a UTC timestamp in the system timezone.
///
/// Display format: `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Compact list rendering for a collection of trips.
pub struct Trips<'a>(pub &'a [Trip]);

impl fmt::Display for Trips<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trips ({})", self.0.len())?;
        if self.0.is_empty() {
            writeln!(f)?;
            writeln!(f, "No trips yet.")?;
            return Ok(());
        }
        for trip in self.0 {
            writeln!(f)?;
            writeln!(f, "## {}. {}", trip.id, trip.title)?;
            writeln!(f)?;
            writeln!(f, "- When: {}", trip.interval)?;
            if let Some(location) = &trip.location {
                writeln!(f, "- Location: {location}")?;
            }
            writeln!(
                f,
                "- Events: {}, Members: {}",
                trip.events.len(),
                trip.members.len()
            )?;
        }
        Ok(())
    }
}

/// Compact list rendering for a trip's events.
pub struct Events<'a>(pub &'a [Event]);

impl fmt::Display for Events<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Events ({})", self.0.len())?;
        for event in self.0 {
            writeln!(f)?;
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

/// Day-by-day schedule for a trip: every calendar date the trip spans,
/// with the events that touch each date.
pub struct DailySchedule<'a>(pub &'a Trip);

impl fmt::Display for DailySchedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} day by day", self.0.title)?;
        for date in self.0.interval.all_dates() {
            writeln!(f)?;
            writeln!(f, "## {}", date.strftime("%Y-%m-%d (%A)"))?;
            let mut any = false;
            for event in &self.0.events {
                if event.interval.overlaps_date(date) {
                    writeln!(f, "- {} ({})", event.title, event.interval)?;
                    any = true;
                }
            }
            if !any {
                writeln!(f, "- free")?;
            }
        }
        Ok(())
    }
}

/// Wrapper for newly created records.
pub struct CreateResult<'a, T>(pub &'a T);

impl<T: fmt::Display> fmt::Display for CreateResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created:")?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Wrapper for updated records.
pub struct UpdateResult<'a, T>(pub &'a T);

impl<T: fmt::Display> fmt::Display for UpdateResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated:")?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Confirmation line for deletions.
pub struct DeleteResult<'a> {
    pub kind: &'a str,
    pub id: &'a str,
}

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} {}.", self.kind, self.id)
    }
}
