//! Builder for creating and configuring trip stores.

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StoreError},
    models::SessionContext,
    source::SqliteTripSource,
    store::ReactiveStore,
    trips::TripStore,
};

/// Builder for a SQLite-backed [`TripStore`].
#[derive(Debug, Clone)]
pub struct TripStoreBuilder {
    database_path: Option<PathBuf>,
    session: Option<SessionContext>,
}

impl TripStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            session: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfare/wayfare.db` or `~/.local/share/wayfare/wayfare.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the session the store's writes are attributed to.
    ///
    /// Defaults to a `local` user when not provided.
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Builds the configured store, initializing the database schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Source` if the database path cannot be prepared
    /// or schema initialization fails.
    pub async fn build(self) -> Result<TripStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::source(format!(
                    "Failed to create database directory '{}'",
                    parent.display()
                ))
                .with_cause(e)
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), StoreError>(())
        })
        .await
        .map_err(|e| StoreError::source("Database initialization task failed").with_cause(e))??;

        let session = self.session.unwrap_or_else(|| SessionContext::new("local"));
        Ok(ReactiveStore::new(SqliteTripSource::new(db_path, session)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfare")
            .place_data_file("wayfare.db")
            .map_err(|e| StoreError::source("Failed to resolve XDG data directory").with_cause(e))
    }
}

impl Default for TripStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
