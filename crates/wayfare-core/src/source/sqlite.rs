//! SQLite-backed trip source.

use std::path::{Path, PathBuf};

use super::{RecordSource, SourceKind};
use crate::{
    db::Database,
    error::Result,
    models::{SessionContext, Trip},
};

/// The Local variant: trips persisted in SQLite.
///
/// Holds a path rather than a live connection and opens the database per
/// call, which keeps the source `Send + Sync` and lets the store run each
/// operation on a blocking task without sharing a connection across
/// threads.
pub struct SqliteTripSource {
    db_path: PathBuf,
    session: SessionContext,
}

impl SqliteTripSource {
    /// Creates a source for the given database path, attributing writes to
    /// the session's user.
    pub fn new<P: AsRef<Path>>(db_path: P, session: SessionContext) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            session,
        }
    }
}

impl RecordSource<Trip> for SqliteTripSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    fn get_all(&self) -> Result<Vec<Trip>> {
        let db = Database::new(&self.db_path)?;
        db.list_trips()
    }

    fn get_by_id(&self, id: &String) -> Result<Option<Trip>> {
        let db = Database::new(&self.db_path)?;
        db.get_trip(id)
    }

    fn insert(&self, mut record: Trip) -> Result<Trip> {
        record.created_by = Some(self.session.user_id.clone());
        let mut db = Database::new(&self.db_path)?;
        db.create_trip(record)
    }

    fn update(&self, record: Trip) -> Result<Trip> {
        let mut db = Database::new(&self.db_path)?;
        db.update_trip(record)
    }

    fn delete_by_id(&self, id: &String) -> Result<()> {
        let mut db = Database::new(&self.db_path)?;
        db.delete_trip(id)
    }
}
