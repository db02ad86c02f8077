//! Database operations for trips, events, and members.

use std::path::Path;
use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::{
    error::{Result, SqliteResultExt, StoreError},
    interval::TimeInterval,
    models::{Event, Location, Member, Trip},
};

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

/// Parses a text column into any `FromStr` type, reporting conversion
/// failures the way rusqlite expects inside row mappers.
fn text_column<T>(index: usize, raw: &str) -> std::result::Result<T, rusqlite::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path)
            .map_err(|e| StoreError::source("Failed to open database connection").with_cause(e))?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        // Cascade deletes for events and members depend on this pragma.
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Inserts a trip and returns it with its assigned identifier.
    ///
    /// Any events or members already attached to the trip are written in the
    /// same transaction.
    pub fn create_trip(&mut self, trip: Trip) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            "INSERT INTO trips (title, description, location, start_date, start_time, end_date, end_time, created_by, created_at, updated_at, next_event_id, next_member_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                trip.title,
                trip.description,
                trip.location,
                trip.interval.start_date.to_string(),
                trip.interval.start_time.to_string(),
                trip.interval.end_date.to_string(),
                trip.interval.end_time.to_string(),
                trip.created_by,
                &now_str,
                &now_str,
                trip.next_event_id as i64,
                trip.next_member_id as i64,
            ],
        )
        .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid();
        Self::insert_children(&tx, id, &trip.events, &trip.members, &now_str)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id: id.to_string(),
            created_at: now,
            updated_at: now,
            ..trip
        })
    }

    /// Retrieves a trip by its ID, with events and members attached.
    pub fn get_trip(&self, id: &str) -> Result<Option<Trip>> {
        let Ok(row_id) = id.parse::<i64>() else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(
                "SELECT id, title, description, location, start_date, start_time, end_date, end_time, created_by, created_at, updated_at, next_event_id, next_member_id
                 FROM trips WHERE id = ?1",
            )
            .db_context("Failed to prepare query")?;

        let trip = stmt
            .query_row(params![row_id], Self::map_trip_row)
            .optional()
            .db_context("Failed to query trip")?;

        match trip {
            Some(trip) => Ok(Some(self.attach_children(trip)?)),
            None => Ok(None),
        }
    }

    /// Lists all trips, newest first, with events and members attached.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT id, title, description, location, start_date, start_time, end_date, end_time, created_by, created_at, updated_at, next_event_id, next_member_id
                 FROM trips ORDER BY created_at DESC, id DESC",
            )
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::map_trip_row)
            .db_context("Failed to query trips")?;

        let mut trips = Vec::new();
        for row in rows {
            let trip = row.db_context("Failed to read trip row")?;
            trips.push(self.attach_children(trip)?);
        }
        Ok(trips)
    }

    /// Replaces a stored trip wholesale, child rows included.
    pub fn update_trip(&mut self, trip: Trip) -> Result<Trip> {
        let row_id = trip
            .id
            .parse::<i64>()
            .map_err(|_| StoreError::not_found(&trip.id))?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        let updated = tx
            .execute(
                "UPDATE trips SET title = ?1, description = ?2, location = ?3, start_date = ?4, start_time = ?5, end_date = ?6, end_time = ?7, updated_at = ?8, next_event_id = ?9, next_member_id = ?10
                 WHERE id = ?11",
                params![
                    trip.title,
                    trip.description,
                    trip.location,
                    trip.interval.start_date.to_string(),
                    trip.interval.start_time.to_string(),
                    trip.interval.end_date.to_string(),
                    trip.interval.end_time.to_string(),
                    &now_str,
                    trip.next_event_id as i64,
                    trip.next_member_id as i64,
                    row_id,
                ],
            )
            .db_context("Failed to update trip")?;

        if updated == 0 {
            return Err(StoreError::not_found(&trip.id));
        }

        // Owned children are replaced wholesale rather than diffed.
        tx.execute("DELETE FROM events WHERE trip_id = ?1", params![row_id])
            .db_context("Failed to clear trip events")?;
        tx.execute("DELETE FROM members WHERE trip_id = ?1", params![row_id])
            .db_context("Failed to clear trip members")?;
        Self::insert_children(&tx, row_id, &trip.events, &trip.members, &now_str)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            updated_at: now,
            ..trip
        })
    }

    /// Permanently deletes a trip; events and members go with it.
    pub fn delete_trip(&mut self, id: &str) -> Result<()> {
        let row_id = id.parse::<i64>().map_err(|_| StoreError::not_found(id))?;

        let deleted = self
            .connection
            .execute("DELETE FROM trips WHERE id = ?1", params![row_id])
            .db_context("Failed to delete trip")?;

        if deleted == 0 {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }

    fn insert_children(
        tx: &Transaction<'_>,
        trip_id: i64,
        events: &[Event],
        members: &[Member],
        now_str: &str,
    ) -> Result<()> {
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO events (id, trip_id, title, description, latitude, longitude, address, location_name, start_date, start_time, end_date, end_time, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                )
                .db_context("Failed to prepare event insert")?;

            for event in events {
                stmt.execute(params![
                    event.id,
                    trip_id,
                    event.title,
                    event.description,
                    event.location.as_ref().map(|l| l.latitude),
                    event.location.as_ref().map(|l| l.longitude),
                    event.location.as_ref().and_then(|l| l.address.clone()),
                    event.location.as_ref().and_then(|l| l.name.clone()),
                    event.interval.start_date.to_string(),
                    event.interval.start_time.to_string(),
                    event.interval.end_date.to_string(),
                    event.interval.end_time.to_string(),
                    event.created_at.to_string(),
                    now_str,
                ])
                .db_context("Failed to insert event")?;
            }
        }

        let mut stmt = tx
            .prepare("INSERT INTO members (id, trip_id, name, email) VALUES (?1, ?2, ?3, ?4)")
            .db_context("Failed to prepare member insert")?;
        for member in members {
            stmt.execute(params![member.id, trip_id, member.name, member.email])
                .db_context("Failed to insert member")?;
        }
        Ok(())
    }

    fn map_trip_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: row.get::<_, i64>(0)?.to_string(),
            title: row.get(1)?,
            description: row.get(2)?,
            location: row.get(3)?,
            interval: Self::map_interval(row, 4)?,
            members: Vec::new(),
            events: Vec::new(),
            created_by: row.get(8)?,
            next_event_id: row.get::<_, i64>(11)? as u64,
            next_member_id: row.get::<_, i64>(12)? as u64,
            created_at: text_column(9, &row.get::<_, String>(9)?)?,
            updated_at: text_column(10, &row.get::<_, String>(10)?)?,
        })
    }

    /// Reads the four interval columns starting at `offset`.
    fn map_interval(row: &rusqlite::Row<'_>, offset: usize) -> rusqlite::Result<TimeInterval> {
        Ok(TimeInterval {
            start_date: text_column(offset, &row.get::<_, String>(offset)?)?,
            start_time: text_column(offset + 1, &row.get::<_, String>(offset + 1)?)?,
            end_date: text_column(offset + 2, &row.get::<_, String>(offset + 2)?)?,
            end_time: text_column(offset + 3, &row.get::<_, String>(offset + 3)?)?,
        })
    }

    fn attach_children(&self, mut trip: Trip) -> Result<Trip> {
        let row_id = trip
            .id
            .parse::<i64>()
            .map_err(|_| StoreError::not_found(&trip.id))?;

        let mut stmt = self
            .connection
            .prepare(
                "SELECT id, trip_id, title, description, latitude, longitude, address, location_name, start_date, start_time, end_date, end_time, created_at, updated_at
                 FROM events WHERE trip_id = ?1 ORDER BY start_date, start_time, id",
            )
            .db_context("Failed to prepare event query")?;

        let events = stmt
            .query_map(params![row_id], |row| {
                let latitude: Option<f64> = row.get(4)?;
                let longitude: Option<f64> = row.get(5)?;
                let location = match (latitude, longitude) {
                    (Some(latitude), Some(longitude)) => Some(Location {
                        latitude,
                        longitude,
                        address: row.get(6)?,
                        name: row.get(7)?,
                    }),
                    _ => None,
                };
                Ok(Event {
                    id: row.get(0)?,
                    trip_id: row.get::<_, i64>(1)?.to_string(),
                    title: row.get(2)?,
                    description: row.get(3)?,
                    location,
                    interval: Self::map_interval(row, 8)?,
                    created_at: text_column(12, &row.get::<_, String>(12)?)?,
                    updated_at: text_column(13, &row.get::<_, String>(13)?)?,
                })
            })
            .db_context("Failed to query events")?;

        for event in events {
            trip.events.push(event.db_context("Failed to read event row")?);
        }

        let mut stmt = self
            .connection
            .prepare("SELECT id, name, email FROM members WHERE trip_id = ?1 ORDER BY id")
            .db_context("Failed to prepare member query")?;

        let members = stmt
            .query_map(params![row_id], |row| {
                Ok(Member {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            })
            .db_context("Failed to query members")?;

        for member in members {
            trip.members.push(member.db_context("Failed to read member row")?);
        }

        Ok(trip)
    }
}
