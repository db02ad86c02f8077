//! Record-source abstraction behind the reactive store.
//!
//! A [`RecordSource`] is the narrow interface the store consumes: full
//! collection reads, point reads, and the three mutations. The store is
//! agnostic to what sits behind it; the variants in [`SourceKind`] cover the
//! supported backends.
//!
//! Sources are deliberately blocking. The store pushes every call through
//! `tokio::task::spawn_blocking`, so implementations are free to do
//! synchronous database or file work without touching the async runtime.

mod memory;
mod remote;
mod sqlite;

pub use memory::MemorySource;
pub use remote::RemoteSource;
pub use sqlite::SqliteTripSource;

use crate::{error::Result, models::Entity};

/// The backend variants a store can be wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Local persistent storage (SQLite)
    Local,
    /// Remote API (declared, not yet implemented; operations fail fast with
    /// `Unsupported`)
    Remote,
    /// In-memory storage for tests and previews
    Mock,
}

/// Underlying data source for one entity collection.
///
/// Mutations report [`crate::StoreError::NotFound`] when the target record
/// no longer exists and wrap backend failures in
/// [`crate::StoreError::Source`]; they never panic across this boundary.
pub trait RecordSource<T: Entity>: Send + Sync + 'static {
    /// Which backend variant this source is.
    fn kind(&self) -> SourceKind;

    /// Reads the full collection, in the source's canonical order.
    fn get_all(&self) -> Result<Vec<T>>;

    /// Reads a single record by id.
    fn get_by_id(&self, id: &T::Id) -> Result<Option<T>>;

    /// Inserts a record and returns it with its source-assigned identifier.
    fn insert(&self, record: T) -> Result<T>;

    /// Replaces a stored record wholesale.
    fn update(&self, record: T) -> Result<T>;

    /// Deletes a record by id.
    fn delete_by_id(&self, id: &T::Id) -> Result<()>;
}
