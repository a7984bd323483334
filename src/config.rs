//! Application Configuration
//!
//! Read from an optional JSON file, then overridden by environment
//! variables. Every field has a default, so an empty `{}` is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainResult, ItemCategory};

pub const DATA_DIR_ENV: &str = "VOICE_CART_DATA_DIR";
pub const LOG_DIR_ENV: &str = "VOICE_CART_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the key-value store keeps its JSON files
    pub data_dir: PathBuf,
    /// Defaults to `<data_dir>/logs`
    pub log_dir: Option<PathBuf>,
    /// Log file name stem
    pub app_name: String,
    /// JSON array of categories used instead of the built-in catalog on first run
    pub categories_file: Option<PathBuf>,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("voice-cart-data"),
            log_dir: None,
            app_name: "VoiceCart".to_string(),
            categories_file: None,
            log_to_file: true,
        }
    }
}

impl AppConfig {
    /// Load from `path` (if given) and apply environment overrides
    pub fn load(path: Option<&Path>) -> DomainResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidInput(format!("config {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| DomainError::InvalidInput(format!("config {}: {}", path.display(), e)))
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.data_dir.join("logs"))
    }

    /// Categories to seed storage with
    pub fn seed_categories(&self) -> DomainResult<Vec<ItemCategory>> {
        let Some(path) = &self.categories_file else {
            return Ok(voice_command::default_categories());
        };
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidInput(format!("categories {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| DomainError::InvalidInput(format!("categories {}: {}", path.display(), e)))
    }
}
