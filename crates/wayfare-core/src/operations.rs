//! Shared validation operations for trip scheduling.
//!
//! These checks are used by every interface that accepts a submission (CLI,
//! form logic, the store's convenience mutators) so that scheduling rules
//! live in one place. They are pure functions over already-constructed
//! models; failures are returned synchronously to the immediate caller and
//! never touch the store's observable error state.

use crate::{
    error::{Result, StoreError},
    models::{Event, Trip},
};

/// Rejects blank required titles.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::validation("title").with_reason("must not be blank"));
    }
    Ok(())
}

/// Ensures an event's interval lies entirely inside its trip's interval,
/// boundaries inclusive.
pub fn ensure_event_within_trip(trip: &Trip, event: &Event) -> Result<()> {
    if !event.interval.is_within(&trip.interval) {
        return Err(StoreError::validation("event.interval").with_reason(format!(
            "event span {} is outside the trip span {}",
            event.interval, trip.interval
        )));
    }
    Ok(())
}

/// Returns the already-scheduled events whose spans overlap the candidate's.
///
/// Touching endpoints do not overlap. An event never conflicts with itself,
/// so updates of an existing event skip the entry with the candidate's id.
pub fn find_conflicts<'a>(scheduled: &'a [Event], candidate: &Event) -> Vec<&'a Event> {
    scheduled
        .iter()
        .filter(|existing| existing.id != candidate.id)
        .filter(|existing| existing.interval.conflicts_with(&candidate.interval))
        .collect()
}

/// Full schedule check for an event submission against its trip.
///
/// Combines the containment and conflict checks; the conflict error names
/// the first clashing event so form logic can point at it.
pub fn validate_event_schedule(trip: &Trip, event: &Event) -> Result<()> {
    validate_title(&event.title)?;
    ensure_event_within_trip(trip, event)?;

    let conflicts = find_conflicts(&trip.events, event);
    if let Some(first) = conflicts.first() {
        return Err(StoreError::validation("event.interval").with_reason(format!(
            "overlaps {} other event(s), starting with '{}' ({})",
            conflicts.len(),
            first.title,
            first.interval
        )));
    }
    Ok(())
}
