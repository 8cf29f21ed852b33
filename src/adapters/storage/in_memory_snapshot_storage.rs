//! In-Memory Snapshot Storage Adapter
//!
//! Stores session snapshots in memory. Useful for testing and for the
//! default single-session deployment where nothing outlives the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// In-memory storage for session snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    snapshots: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl InMemorySnapshotStorage {
    /// Creates a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored snapshots (useful for tests).
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of stored snapshots.
    pub fn snapshot_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, AssessmentSession>> {
        // A poisoned lock only happens if another thread panicked while
        // holding it; the map itself is still consistent.
        self.snapshots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStorage for InMemorySnapshotStorage {
    fn save(&self, session: &AssessmentSession) -> Result<(), SnapshotStorageError> {
        self.lock().insert(*session.id(), session.clone());
        Ok(())
    }

    fn load(&self, id: SessionId) -> Result<AssessmentSession, SnapshotStorageError> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(SnapshotStorageError::NotFound(id))
    }

    fn exists(&self, id: SessionId) -> Result<bool, SnapshotStorageError> {
        Ok(self.lock().contains_key(&id))
    }

    fn delete(&self, id: SessionId) -> Result<(), SnapshotStorageError> {
        self.lock().remove(&id);
        Ok(())
    }
}
