//! Data models for trips, events, and members.
//!
//! The core domain models of the trip planner. A [`Trip`] owns zero or more
//! [`Event`]s and [`Member`]s; every scheduled record carries a
//! [`TimeInterval`]. By convention an event's interval lies within its parent
//! trip's interval; enforcement of that convention is a caller
//! responsibility, exposed as reusable checks in [`crate::operations`].
//!
//! Models are immutable once constructed: edits go through copy-on-write
//! (clone, modify, write back via the store). Each model implements
//! [`std::fmt::Display`] for direct markdown formatting, with contextual
//! wrappers in [`crate::display`] for lists and operation results.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;

/// A record with a source-assigned identifier.
///
/// The reactive store is generic over any entity type; sources use
/// [`Entity::with_id`] to stamp the identifier they assign on insert.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type for this entity.
    type Id: Clone + Eq + Send + Sync + fmt::Display + 'static;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the record with its identifier replaced.
    fn with_id(self, id: Self::Id) -> Self;
}

/// Explicit session identity passed to source construction.
///
/// Replaces process-wide mutable current-user state: whoever constructs a
/// source decides which user its writes are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Identifier of the acting user.
    pub user_id: String,
}

impl SessionContext {
    /// Creates a session for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// A geographic point attached to an event.
///
/// Payload only: geocoding and map rendering live outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable address, when known
    pub address: Option<String>,
    /// Display name for the place
    pub name: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)?;
        if let Some(address) = &self.address {
            write!(f, ", {address}")?;
        }
        Ok(())
    }
}

/// A scheduled activity inside a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Source-assigned identifier (empty until inserted)
    pub id: String,

    /// Identifier of the owning trip
    pub trip_id: String,

    /// Title of the event
    pub title: String,

    /// Optional multi-line description
    pub description: Option<String>,

    /// Where the event takes place
    pub location: Option<Location>,

    /// Scheduled span; expected to lie within the owning trip's interval
    pub interval: TimeInterval,

    /// Timestamp when the event was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the event was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Event {
    /// Creates an unsaved event with the given title and schedule.
    pub fn new(title: impl Into<String>, interval: TimeInterval) -> Self {
        let now = Timestamp::now();
        Self {
            id: String::new(),
            trip_id: String::new(),
            title: title.into(),
            description: None,
            location: None,
            interval,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Event {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f, "- When: {}", self.interval)?;
        if let Some(location) = &self.location {
            writeln!(f, "- Where: {location}")?;
        }
        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        Ok(())
    }
}

/// A person participating in a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Source-assigned identifier (empty until inserted)
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email, when known
    pub email: Option<String>,
}

impl Member {
    /// Creates an unsaved member with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: None,
        }
    }
}

impl Entity for Member {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(email) = &self.email {
            write!(f, " <{email}>")?;
        }
        Ok(())
    }
}

/// A complete trip with its schedule, events, and members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Source-assigned identifier (empty until inserted)
    pub id: String,

    /// Title of the trip
    pub title: String,

    /// Optional multi-line description
    pub description: Option<String>,

    /// Free-form destination description ("Toronto to Ottawa")
    pub location: Option<String>,

    /// Scheduled span of the whole trip
    pub interval: TimeInterval,

    /// People on the trip
    pub members: Vec<Member>,

    /// Scheduled activities, owned by this trip
    pub events: Vec<Event>,

    /// Next identifier to assign to a new event; never moves backwards,
    /// so a removed event's id is not reused
    pub next_event_id: u64,

    /// Next identifier to assign to a new member
    pub next_member_id: u64,

    /// User the trip is attributed to, from the session context
    pub created_by: Option<String>,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Trip {
    /// Creates an unsaved trip with the given title and schedule.
    pub fn new(title: impl Into<String>, interval: TimeInterval) -> Self {
        let now = Timestamp::now();
        Self {
            id: String::new(),
            title: title.into(),
            description: None,
            location: None,
            interval,
            members: Vec::new(),
            events: Vec::new(),
            next_event_id: 1,
            next_member_id: 1,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Looks up an owned event by id.
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Looks up a member by id.
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }
}

impl Entity for Trip {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- When: {}", self.interval)?;
        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
        }
        if let Some(created_by) = &self.created_by {
            writeln!(f, "- Created by: {created_by}")?;
        }
        writeln!(f, "- Created: {}", crate::display::LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", crate::display::LocalDateTime(&self.updated_at))?;

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        if !self.members.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Members ({})", self.members.len())?;
            writeln!(f)?;
            for member in &self.members {
                writeln!(f, "- {member}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Events ({})", self.events.len())?;
        if self.events.is_empty() {
            writeln!(f)?;
            writeln!(f, "No events scheduled.")?;
        } else {
            for (position, event) in self.events.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "{}. {} ({})", position + 1, event.title, event.interval)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
