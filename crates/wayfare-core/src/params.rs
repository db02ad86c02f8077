//! Parameter structures for trip operations.
//!
//! Interface-agnostic parameter types shared across surfaces (CLI today,
//! other frontends later) without framework-specific derives. Interface
//! layers wrap these with their own derives (clap args and so on) and
//! convert via `From`/accessors, keeping the core free of UI concerns.

use serde::{Deserialize, Serialize};

use crate::{
    interval::TimeInterval,
    models::{Event, Location, Trip},
};

/// Generic parameters for operations requiring just a trip ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripId {
    /// The ID of the trip to operate on
    pub id: String,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrip {
    /// Title of the trip
    pub title: String,

    /// Detailed multi-line description of the trip
    pub description: Option<String>,

    /// Free-form destination description
    pub location: Option<String>,

    /// Scheduled span of the trip
    pub interval: TimeInterval,
}

impl From<CreateTrip> for Trip {
    fn from(params: CreateTrip) -> Self {
        let mut trip = Trip::new(params.title, params.interval);
        trip.description = params.description;
        trip.location = params.location;
        trip
    }
}

/// Parameters for scheduling an event inside a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// The trip to schedule into
    pub trip_id: String,

    /// Title of the event
    pub title: String,

    /// Detailed description of the event
    pub description: Option<String>,

    /// Where the event takes place
    pub location: Option<Location>,

    /// Scheduled span of the event
    pub interval: TimeInterval,
}

impl From<ScheduleEvent> for Event {
    fn from(params: ScheduleEvent) -> Self {
        let mut event = Event::new(params.title, params.interval);
        event.trip_id = params.trip_id;
        event.description = params.description;
        event.location = params.location;
        event
    }
}

/// Parameters for renaming a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTitle {
    /// The trip to rename
    pub id: String,

    /// New title
    pub title: String,
}

/// Parameters for replacing a trip's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescription {
    /// The trip to update
    pub id: String,

    /// New description; `None` clears it
    pub description: Option<String>,
}
