//! Declared-but-unimplemented remote API source.

use std::marker::PhantomData;

use super::{RecordSource, SourceKind};
use crate::{
    error::{Result, StoreError},
    models::{Entity, SessionContext},
};

/// The Remote variant, reserved for the future API integration.
///
/// Every operation fails fast with [`StoreError::Unsupported`] so callers
/// get a typed error instead of a runtime panic. The session context is
/// taken at construction so the wiring is already in place when the
/// transport lands.
pub struct RemoteSource<T> {
    #[allow(dead_code)]
    session: SessionContext,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> RemoteSource<T> {
    /// Declares a remote source for the given session.
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> RecordSource<T> for RemoteSource<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    fn get_all(&self) -> Result<Vec<T>> {
        Err(StoreError::unsupported("remote get_all"))
    }

    fn get_by_id(&self, _id: &T::Id) -> Result<Option<T>> {
        Err(StoreError::unsupported("remote get_by_id"))
    }

    fn insert(&self, _record: T) -> Result<T> {
        Err(StoreError::unsupported("remote insert"))
    }

    fn update(&self, _record: T) -> Result<T> {
        Err(StoreError::unsupported("remote update"))
    }

    fn delete_by_id(&self, _id: &T::Id) -> Result<()> {
        Err(StoreError::unsupported("remote delete"))
    }
}
