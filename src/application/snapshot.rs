//! SnapshotService - save and resume sessions through the storage port.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// Saves and resumes session snapshots through whatever storage adapter
/// the enclosing application wired in.
pub struct SnapshotService {
    storage: Arc<dyn SnapshotStorage>,
}

impl SnapshotService {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    /// Saves a snapshot of the session.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStorageError` if the save fails.
    pub fn save(&self, session: &AssessmentSession) -> Result<(), SnapshotStorageError> {
        self.storage.save(session)?;
        tracing::debug!(session = %session.id(), "snapshot saved");
        Ok(())
    }

    /// Resumes a session from its snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStorageError::NotFound` if no snapshot exists.
    pub fn resume(&self, id: SessionId) -> Result<AssessmentSession, SnapshotStorageError> {
        let session = self.storage.load(id)?;
        tracing::info!(session = %id, section = %session.section(), "session resumed");
        Ok(session)
    }

    /// Returns true if a snapshot exists for the session.
    pub fn exists(&self, id: SessionId) -> Result<bool, SnapshotStorageError> {
        self.storage.exists(id)
    }

    /// Discards the snapshot for a session, if any.
    pub fn discard(&self, id: SessionId) -> Result<(), SnapshotStorageError> {
        self.storage.delete(id)?;
        tracing::debug!(session = %id, "snapshot discarded");
        Ok(())
    }
}
