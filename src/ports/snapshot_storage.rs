//! Snapshot Storage Port - Interface for persisting session snapshots.
//!
//! The snapshot is the serialized session aggregate, treated as opaque
//! by everything except the adapter that stores it. The port is
//! synchronous: the engine and session are plain in-memory computation
//! with no suspension points.

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;

/// Errors that can occur during snapshot storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStorageError {
    #[error("Snapshot not found for session: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for saving and resuming session snapshots.
pub trait SnapshotStorage: Send + Sync {
    /// Saves a snapshot of the session, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStorageError` if the save fails.
    fn save(&self, session: &AssessmentSession) -> Result<(), SnapshotStorageError>;

    /// Loads the snapshot for a session.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStorageError::NotFound` if no snapshot exists.
    fn load(&self, id: SessionId) -> Result<AssessmentSession, SnapshotStorageError>;

    /// Checks whether a snapshot exists for a session.
    fn exists(&self, id: SessionId) -> Result<bool, SnapshotStorageError>;

    /// Deletes the snapshot for a session, if any.
    fn delete(&self, id: SessionId) -> Result<(), SnapshotStorageError>;
}
