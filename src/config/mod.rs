//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `VIBE_CHECK` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vibe_check::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sessions stored in {}", config.assessment.snapshot_dir);
//! ```

mod assessment;
mod error;
mod resources;

pub use assessment::AssessmentConfig;
pub use error::{ConfigError, ValidationError};
pub use resources::ResourcesConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Everything has a working default; the assessment runs with no
/// environment at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Assessment configuration (default locale, snapshot directory)
    #[serde(default)]
    pub assessment: AssessmentConfig,

    /// Resource text (crisis lines, clinic URL)
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VIBE_CHECK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `VIBE_CHECK__ASSESSMENT__DEFAULT_LANGUAGE=es`
    /// - `VIBE_CHECK__RESOURCES__CRISIS_LINES=...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VIBE_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.assessment.validate()?;
        self.resources.validate()?;
        Ok(())
    }
}
