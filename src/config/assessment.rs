//! Assessment configuration (default locale, snapshot directory).

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Language;

fn default_language() -> Language {
    Language::En
}

fn default_snapshot_dir() -> String {
    "./data/sessions".to_string()
}

/// Configuration for the assessment itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Locale a new session starts in.
    #[serde(default = "default_language")]
    pub default_language: Language,

    /// Directory where the file snapshot adapter stores sessions.
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

impl AssessmentConfig {
    /// Validates the assessment configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.trim().is_empty() {
            return Err(ValidationError::EmptySnapshotDir);
        }
        Ok(())
    }
}
