//! File-based Snapshot Storage Adapter
//!
//! Stores each session snapshot as one YAML file under a base directory,
//! named by session id. The serialized form is opaque to the rest of the
//! system.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// File-based storage for session snapshots.
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    base_path: PathBuf,
}

impl FileSnapshotStorage {
    /// Creates a file storage rooted at the given directory.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSnapshotStorage::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the snapshot file path for a session.
    fn snapshot_path(&self, id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    fn ensure_base_dir(&self) -> Result<(), SnapshotStorageError> {
        fs::create_dir_all(&self.base_path).map_err(|e| SnapshotStorageError::Io(e.to_string()))
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn save(&self, session: &AssessmentSession) -> Result<(), SnapshotStorageError> {
        self.ensure_base_dir()?;

        let yaml = serde_yaml::to_string(session)
            .map_err(|e| SnapshotStorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.snapshot_path(*session.id()), yaml)
            .map_err(|e| SnapshotStorageError::Io(e.to_string()))
    }

    fn load(&self, id: SessionId) -> Result<AssessmentSession, SnapshotStorageError> {
        let path = self.snapshot_path(id);
        if !path.exists() {
            return Err(SnapshotStorageError::NotFound(id));
        }

        let yaml =
            fs::read_to_string(&path).map_err(|e| SnapshotStorageError::Io(e.to_string()))?;

        serde_yaml::from_str(&yaml)
            .map_err(|e| SnapshotStorageError::DeserializationFailed(e.to_string()))
    }

    fn exists(&self, id: SessionId) -> Result<bool, SnapshotStorageError> {
        Ok(self.snapshot_path(id).exists())
    }

    fn delete(&self, id: SessionId) -> Result<(), SnapshotStorageError> {
        let path = self.snapshot_path(id);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path).map_err(|e| SnapshotStorageError::Io(e.to_string()))
    }
}
