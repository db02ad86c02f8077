//! Core library for the Wayfare trip-planning application.
//!
//! This crate provides the scheduling and state-synchronization logic for
//! managing trips and their events: a timezone-free interval algebra for
//! validating schedules, and a reactive store that coordinates mutations
//! against a record source while exposing an observable snapshot plus
//! loading/error state to any number of concurrent observers.
//!
//! # Architecture
//!
//! - [`interval`]: the [`TimeInterval`] value type and its predicates
//!   (containment, conflict, date enumeration). Pure and synchronous.
//! - [`models`]: trips, events, members, and the [`Entity`] trait sources
//!   use to assign identifiers.
//! - [`source`]: the [`RecordSource`] abstraction with Local (SQLite),
//!   Remote (declared), and Mock (in-memory) variants.
//! - [`store`]: the [`ReactiveStore`] synchronization engine; mutations
//!   are bracketed by loading/error state and always followed by a full
//!   snapshot refresh.
//! - [`trips`]: trip-domain conveniences (event scheduling with conflict
//!   rejection, member management, field setters) layered on the store.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfare_core::{
//!     interval::{self, TimeInterval},
//!     MemorySource, ReactiveStore, Trip,
//! };
//!
//! # async fn example() -> wayfare_core::Result<()> {
//! let store = ReactiveStore::new(MemorySource::new());
//! let snapshots = store.subscribe();
//!
//! let interval = TimeInterval::new(
//!     interval::date(2025, 7, 1)?,
//!     interval::time(9, 0, 0)?,
//!     interval::date(2025, 7, 10)?,
//!     interval::time(17, 0, 0)?,
//! )?;
//!
//! let trip = store.create(Trip::new("Summer Getaway", interval)).await?;
//! assert!(snapshots.borrow().iter().any(|t: &Trip| t.id == trip.id));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod interval;
pub mod models;
pub mod operations;
pub mod params;
pub mod source;
pub mod store;
pub mod trips;

// Re-export commonly used types
pub use db::Database;
pub use error::{ErrorKind, OperationError, Result, StoreError};
pub use interval::TimeInterval;
pub use models::{Entity, Event, Location, Member, SessionContext, Trip};
pub use source::{MemorySource, RecordSource, RemoteSource, SourceKind, SqliteTripSource};
pub use store::{ReactiveStore, Snapshot, TripStoreBuilder};
pub use trips::TripStore;
