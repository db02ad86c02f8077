//! Reactive synchronization engine over a record source.
//!
//! [`ReactiveStore`] wraps a [`RecordSource`] behind one authoritative,
//! observable view: the current [`Snapshot`], a loading flag, and the last
//! operation error. Any number of observers subscribe through
//! latest-value [`watch`] channels; the store itself is the only writer.
//!
//! # Protocol
//!
//! Every mutating operation follows the same bracket:
//!
//! 1. The last error is cleared and the loading flag raised.
//! 2. The source call runs on a blocking task.
//! 3. On success the full collection is re-read and the snapshot swapped
//!    atomically; only then does the loading flag drop.
//! 4. On failure at any step the snapshot is left untouched (stale but
//!    consistent beats flashing to empty), the error is recorded on the
//!    error channel, and the same error is returned to the caller.
//!
//! Observers therefore never see a snapshot update outside a loading
//! window, and never see a torn snapshot: replacement is a single
//! `send_replace` of an immutable `Arc`.
//!
//! # Concurrency
//!
//! Mutations are not serialized against each other. If two race, both
//! perform their source effect and both trigger a refresh; since every
//! refresh re-reads the full collection, neither mutation is lost and the
//! final snapshot is whichever refresh completes last. A failed operation
//! never poisons the store; the next operation starts from a clean error
//! state.
//!
//! Dropping a mutating future mid-flight (`tokio::select!`, a timeout, an
//! aborted task) closes the bracket too: the loading flag is lowered and a
//! `Cancelled` error recorded, so observers are never left with a stuck
//! loading state. The source call itself runs to completion on its
//! blocking thread; the next refresh picks up its effect.

use std::sync::Arc;

use log::{debug, warn};
use tokio::{sync::watch, task};

use crate::{
    error::{OperationError, Result, StoreError},
    models::Entity,
    source::{RecordSource, SourceKind},
};

mod builder;
pub use builder::TripStoreBuilder;

/// Immutable ordered view of a collection, replaced wholesale on refresh.
///
/// Cheap to clone and safe to hand to any number of concurrent readers;
/// nothing mutates a snapshot in place.
pub type Snapshot<T> = Arc<[T]>;

/// Observable store coordinating mutations against an underlying source.
///
/// Generic over the entity type and the source behind it. All predicates
/// and snapshot reads are synchronous; only the source calls block, and
/// those run on `spawn_blocking` tasks.
pub struct ReactiveStore<T: Entity, S: RecordSource<T>> {
    source: Arc<S>,
    snapshot_tx: watch::Sender<Snapshot<T>>,
    loading_tx: watch::Sender<bool>,
    error_tx: watch::Sender<Option<OperationError>>,
}

impl<T, S> ReactiveStore<T, S>
where
    T: Entity,
    S: RecordSource<T>,
{
    /// Creates a store over the given source with an empty snapshot.
    ///
    /// The snapshot stays empty until the first [`ReactiveStore::refresh`]
    /// or successful mutation.
    pub fn new(source: S) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::from(Vec::new()));
        let (loading_tx, _) = watch::channel(false);
        let (error_tx, _) = watch::channel(None);
        Self {
            source: Arc::new(source),
            snapshot_tx,
            loading_tx,
            error_tx,
        }
    }

    /// Which backend variant this store is wired to.
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Subscribes to snapshot replacements.
    ///
    /// The current snapshot is visible immediately through the receiver;
    /// every subsequent replacement is delivered to every subscriber. A
    /// slow subscriber may miss intermediate snapshots but always observes
    /// the most recent one.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribes to the loading flag.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading_tx.subscribe()
    }

    /// Subscribes to the last-error state.
    pub fn subscribe_error(&self) -> watch::Receiver<Option<OperationError>> {
        self.error_tx.subscribe()
    }

    /// The current snapshot, without subscribing.
    pub fn snapshot(&self) -> Snapshot<T> {
        self.snapshot_tx.borrow().clone()
    }

    /// Whether an operation is currently in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading_tx.borrow()
    }

    /// The last recorded operation error, if any.
    pub fn last_error(&self) -> Option<OperationError> {
        self.error_tx.borrow().clone()
    }

    /// Inserts a record through the source, then refreshes the snapshot.
    ///
    /// Returns the record with its source-assigned identifier; the snapshot
    /// visible after this call resolves includes it.
    pub async fn create(&self, record: T) -> Result<T> {
        self.mutate("create", move |source| source.insert(record))
            .await
    }

    /// Replaces a record through the source, then refreshes the snapshot.
    pub async fn update(&self, record: T) -> Result<T> {
        self.mutate("update", move |source| source.update(record))
            .await
    }

    /// Deletes a record through the source, then refreshes the snapshot.
    pub async fn delete(&self, id: T::Id) -> Result<()> {
        self.mutate("delete", move |source| source.delete_by_id(&id))
            .await
    }

    /// Re-reads the full collection and replaces the snapshot atomically.
    ///
    /// Follows the same loading/error bracket as the mutations but performs
    /// no mutation first. Suitable for pull-to-refresh.
    pub async fn refresh(&self) -> Result<()> {
        let bracket = Bracket::open("refresh", &self.loading_tx, &self.error_tx);
        let result = self.reload_snapshot().await;
        bracket.close(result.as_ref().err());
        result
    }

    /// Reads a single record straight from the source.
    pub async fn get_by_id(&self, id: T::Id) -> Result<Option<T>> {
        self.run_source("get_by_id", move |source| source.get_by_id(&id))
            .await
    }

    /// Reads the current record, applies a fallible transform, and writes
    /// the result back, refreshing the snapshot on success.
    ///
    /// Fails with [`StoreError::NotFound`] when the record no longer
    /// exists; a partial record is never fabricated. Field-level setters
    /// are expressed through this.
    pub async fn update_with<F>(&self, id: T::Id, transform: F) -> Result<T>
    where
        F: FnOnce(T) -> Result<T> + Send + 'static,
    {
        self.mutate("update", move |source| {
            let current = source
                .get_by_id(&id)?
                .ok_or_else(|| StoreError::not_found(&id))?;
            source.update(transform(current)?)
        })
        .await
    }

    /// Runs one source operation inside the loading/error bracket and
    /// refreshes the snapshot if it succeeds.
    async fn mutate<R, F>(&self, operation: &'static str, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&S) -> Result<R> + Send + 'static,
    {
        let bracket = Bracket::open(operation, &self.loading_tx, &self.error_tx);
        debug!("store {operation} started");
        let result = match self.run_source(operation, f).await {
            Ok(value) => self.reload_snapshot().await.map(|()| value),
            Err(error) => Err(error),
        };
        bracket.close(result.as_ref().err());
        result
    }

    /// Re-reads the collection and swaps the snapshot in one replacement.
    async fn reload_snapshot(&self) -> Result<()> {
        let records = self
            .run_source("refresh", |source| source.get_all())
            .await?;
        debug!("snapshot replaced ({} records)", records.len());
        self.snapshot_tx.send_replace(Snapshot::from(records));
        Ok(())
    }

    /// Dispatches a blocking source call onto the runtime's blocking pool.
    ///
    /// An aborted task surfaces as [`StoreError::Cancelled`] rather than
    /// disappearing; the surrounding bracket still resets the loading flag.
    async fn run_source<R, F>(&self, operation: &'static str, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&S) -> Result<R> + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        match task::spawn_blocking(move || f(&source)).await {
            Ok(result) => result,
            Err(join_error) if join_error.is_cancelled() => Err(StoreError::cancelled(operation)),
            Err(join_error) => Err(StoreError::source(format!("{operation} task failed"))
                .with_cause(join_error)),
        }
    }
}

/// An open loading/error window over the store's state channels.
///
/// Opening clears the last error and raises the loading flag; `close`
/// records any failure and lowers it. The window lives across awaits, so
/// if the owning future is dropped before `close` runs, `Drop` still
/// lowers the flag and records a `Cancelled` error. The loading flag can
/// never be left stuck by an abandoned caller.
struct Bracket<'a> {
    operation: &'static str,
    loading_tx: &'a watch::Sender<bool>,
    error_tx: &'a watch::Sender<Option<OperationError>>,
    open: bool,
}

impl<'a> Bracket<'a> {
    fn open(
        operation: &'static str,
        loading_tx: &'a watch::Sender<bool>,
        error_tx: &'a watch::Sender<Option<OperationError>>,
    ) -> Self {
        error_tx.send_replace(None);
        loading_tx.send_replace(true);
        Self {
            operation,
            loading_tx,
            error_tx,
            open: true,
        }
    }

    /// Records any failure, then lowers the loading flag.
    fn close(mut self, failure: Option<&StoreError>) {
        if let Some(error) = failure {
            warn!("store operation failed: {error}");
            self.error_tx.send_replace(Some(OperationError::from(error)));
        }
        self.loading_tx.send_replace(false);
        self.open = false;
    }
}

impl Drop for Bracket<'_> {
    fn drop(&mut self) {
        if self.open {
            let error = StoreError::cancelled(self.operation);
            warn!("store operation dropped mid-flight: {error}");
            self.error_tx.send_replace(Some(OperationError::from(&error)));
            self.loading_tx.send_replace(false);
        }
    }
}
