//! Local persistence: storage media, the persisted value wrapper, and
//! TOML configuration.

pub mod backend;
mod config;
pub mod persisted;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::PlannerConfig;
pub use persisted::Persisted;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/college-planner[-dev]/` based on PLANNER_ENV.
///
/// Set PLANNER_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoDataDir)?
        .join(".config");

    let env = std::env::var("PLANNER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("college-planner-dev")
    } else {
        base_dir.join("college-planner")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
