//! Configuration management for RAX Forms
//!
//! Values come from built-in defaults, then an optional `rax-forms.toml`,
//! then `RAX_FORMS_*` environment variables.

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::slot::is_valid_slot_name;

const DEFAULT_STORAGE_DIR: &str = "./rax-forms-data";
const DEFAULT_SLOT_NAME: &str = "users";
const DEFAULT_SUCCESS_DISMISS_MS: i64 = 5000;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one file per storage slot
    /// Environment: RAX_FORMS_STORAGE_DIR
    pub storage_dir: String,

    /// Slot holding the registered users
    /// Environment: RAX_FORMS_SLOT_NAME
    pub slot_name: String,

    /// How long success banners stay visible
    /// Environment: RAX_FORMS_SUCCESS_DISMISS_MS
    pub success_dismiss_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: DEFAULT_STORAGE_DIR.to_string(),
            slot_name: DEFAULT_SLOT_NAME.to_string(),
            success_dismiss_ms: DEFAULT_SUCCESS_DISMISS_MS as u64,
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config files with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let config_paths = [
            "config/rax-forms", // ./config/rax-forms.toml
            "rax-forms",        // ./rax-forms.toml
        ];

        let mut builder = Self::defaults()?;
        for config_path in config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("RAX_FORMS"));

        Self::finish(builder)
    }

    /// Load configuration from a single file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("storage_dir", DEFAULT_STORAGE_DIR)?
            .set_default("slot_name", DEFAULT_SLOT_NAME)?
            .set_default("success_dismiss_ms", DEFAULT_SUCCESS_DISMISS_MS)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_dir.trim().is_empty() {
            return Err(ConfigError::Message("storage_dir cannot be empty".into()));
        }

        if !is_valid_slot_name(&self.slot_name) {
            return Err(ConfigError::Message(format!(
                "slot_name {:?} must be non-empty and use only letters, digits, '_' or '-'",
                self.slot_name
            )));
        }

        if self.success_dismiss_ms == 0 {
            return Err(ConfigError::Message(
                "success_dismiss_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get storage directory as PathBuf
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }

    /// Get the success banner delay as Duration
    pub fn success_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }
}
