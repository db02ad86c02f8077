//! Trip-level operations over the reactive store.
//!
//! The store itself is generic; this module adds the trip domain on top:
//! field-level setters and event/member management, all expressed as
//! read-transform-write through [`ReactiveStore::update_with`] so they
//! inherit the store's loading/error bracket and refresh-after-mutation
//! guarantee. Scheduling rules are enforced here with the checks from
//! [`crate::operations`] before anything reaches the source.

use crate::{
    error::{Result, StoreError},
    models::{Event, Member, Trip},
    operations,
    source::{RecordSource, SqliteTripSource},
    store::ReactiveStore,
};

/// The SQLite-backed trip store used by the CLI.
pub type TripStore = ReactiveStore<Trip, SqliteTripSource>;

/// Next child identifier within a trip.
///
/// Uses the trip's persisted counter, bumped past any higher id already
/// present so hand-assembled trips stay consistent. Counters never move
/// backwards, so removing the newest child does not recycle its id.
fn next_child_id<'a>(counter: u64, ids: impl Iterator<Item = &'a str>) -> u64 {
    let floor = ids
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1);
    counter.max(floor)
}

impl<S: RecordSource<Trip>> ReactiveStore<Trip, S> {
    /// Renames a trip. Fails with `NotFound` when the trip is gone and
    /// `Validation` when the new title is blank.
    pub async fn update_title(&self, trip_id: String, title: String) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            operations::validate_title(&title)?;
            trip.title = title;
            Ok(trip)
        })
        .await
    }

    /// Replaces a trip's description.
    pub async fn update_description(
        &self,
        trip_id: String,
        description: Option<String>,
    ) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            trip.description = description;
            Ok(trip)
        })
        .await
    }

    /// Schedules an event inside a trip.
    ///
    /// The event must lie within the trip's interval and must not overlap
    /// any already-scheduled event; its identifier is assigned here from
    /// the trip's event list.
    pub async fn add_event(&self, trip_id: String, event: Event) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            let id = next_child_id(trip.next_event_id, trip.events.iter().map(|e| e.id.as_str()));
            trip.next_event_id = id + 1;
            let event = Event {
                id: id.to_string(),
                trip_id: trip.id.clone(),
                ..event
            };
            operations::validate_event_schedule(&trip, &event)?;
            trip.events.push(event);
            Ok(trip)
        })
        .await
    }

    /// Replaces a scheduled event, re-validating its schedule against the
    /// rest of the trip.
    pub async fn update_event(
        &self,
        trip_id: String,
        event_id: String,
        updated: Event,
    ) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            let position = trip
                .events
                .iter()
                .position(|e| e.id == event_id)
                .ok_or_else(|| StoreError::not_found(&event_id))?;
            let event = Event {
                id: event_id.clone(),
                trip_id: trip.id.clone(),
                ..updated
            };
            operations::validate_event_schedule(&trip, &event)?;
            trip.events[position] = event;
            Ok(trip)
        })
        .await
    }

    /// Removes an event from a trip.
    pub async fn remove_event(&self, trip_id: String, event_id: String) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            let position = trip
                .events
                .iter()
                .position(|e| e.id == event_id)
                .ok_or_else(|| StoreError::not_found(&event_id))?;
            trip.events.remove(position);
            Ok(trip)
        })
        .await
    }

    /// Adds a member to a trip, assigning their identifier.
    pub async fn add_member(&self, trip_id: String, member: Member) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            if member.name.trim().is_empty() {
                return Err(StoreError::validation("member.name").with_reason("must not be blank"));
            }
            let id =
                next_child_id(trip.next_member_id, trip.members.iter().map(|m| m.id.as_str()));
            trip.next_member_id = id + 1;
            let member = Member {
                id: id.to_string(),
                ..member
            };
            trip.members.push(member);
            Ok(trip)
        })
        .await
    }

    /// Removes a member from a trip.
    pub async fn remove_member(&self, trip_id: String, member_id: String) -> Result<Trip> {
        self.update_with(trip_id, move |mut trip| {
            let position = trip
                .members
                .iter()
                .position(|m| m.id == member_id)
                .ok_or_else(|| StoreError::not_found(&member_id))?;
            trip.members.remove(position);
            Ok(trip)
        })
        .await
    }
}
