//! Resource configuration (crisis lines, clinic URL).

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::session::DEFAULT_CRISIS_LINES;

fn default_crisis_lines() -> String {
    DEFAULT_CRISIS_LINES.to_string()
}

fn default_clinic_url() -> String {
    "https://www.healthmatters.clinic".to_string()
}

/// Static resource text embedded in reports and plans.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesConfig {
    /// Newline-separated crisis lines printed in every report.
    #[serde(default = "default_crisis_lines")]
    pub crisis_lines: String,

    /// The clinic's public site.
    #[serde(default = "default_clinic_url")]
    pub clinic_url: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            crisis_lines: default_crisis_lines(),
            clinic_url: default_clinic_url(),
        }
    }
}

impl ResourcesConfig {
    /// Validates the resource configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.crisis_lines.trim().is_empty() {
            return Err(ValidationError::EmptyCrisisLines);
        }
        if !self.clinic_url.starts_with("http://") && !self.clinic_url.starts_with("https://") {
            return Err(ValidationError::InvalidClinicUrl);
        }
        Ok(())
    }
}
