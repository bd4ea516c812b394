//! TOML-based planner configuration.
//!
//! Stores:
//! - The semester start date (the lock threshold for editing days)
//! - An optional override for where planner data files are written
//!
//! Configuration is stored at `~/.config/college-planner/config.toml`.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::model::DEFAULT_SEMESTER_START;

/// Planner configuration.
///
/// Serialized to/from TOML at `~/.config/college-planner/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Days strictly before this date are locked.
    #[serde(
        default = "default_semester_start",
        deserialize_with = "deserialize_date"
    )]
    pub semester_start: NaiveDate,
    /// Directory for `subjects.json` and `dayData.json`. Defaults to the data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

fn default_semester_start() -> NaiveDate {
    DEFAULT_SEMESTER_START
}

/// Accepts a native TOML date (`2026-01-12`) or a quoted one (`"2026-01-12"`).
///
/// A full datetime contributes only its date.
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Datetime(datetime) => {
            let date = datetime
                .date
                .ok_or_else(|| D::Error::custom(format!("expected a date, got {datetime}")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .ok_or_else(|| D::Error::custom(format!("invalid date {date}")))
        }
        toml::Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("invalid date '{text}': {e}"))),
        other => Err(D::Error::custom(format!(
            "expected a date, got {}",
            other.type_str()
        ))),
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            semester_start: default_semester_start(),
            storage_dir: None,
        }
    }
}

impl PlannerConfig {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from a specific file, writing defaults there if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: PlannerConfig = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |e: &dyn std::fmt::Display| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(&e))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(&e))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(&e))?;
        Ok(())
    }

    /// Directory the planner's persisted values live in.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the data dir cannot be resolved.
    pub fn resolve_storage_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_dir(),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }
}
