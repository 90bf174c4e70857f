//! Battle configuration loaded from TOML

mod constants;

pub use constants::{
    ArchetypeConstants, ArchetypeStats, BattleConstants, SkillConstants, TurnConstants,
};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading or validating battle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Read and deserialize a TOML file
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(path.to_path_buf()),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        error: e,
        path: Some(path.to_path_buf()),
    })
}

/// Deserialize a TOML string
pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        error: e,
        path: None,
    })
}
