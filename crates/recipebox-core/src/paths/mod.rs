//! Data file resolution.
//!
//! The recipe collection lives in a single JSON file. Its location comes
//! from, in order:
//! 1. An explicit path provided by the caller (CLI flag)
//! 2. The `RECIPEBOX_DATA_FILE` environment variable (also read from `.env`)
//! 3. `data/recipes.json` under the current working directory
//!
//! # Design
//!
//! - Returns absolute `PathBuf`s; `~` is expanded to the home directory
//! - No filesystem access: whether the file exists is the store's concern

mod error;

use std::env;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable that overrides the data file location.
pub const DATA_FILE_ENV: &str = "RECIPEBOX_DATA_FILE";

/// Default data file location, relative to the working directory.
pub const DEFAULT_DATA_FILE_RELATIVE: &str = "data/recipes.json";

/// How the data file path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFileSource {
    /// The user passed an explicit path.
    Explicit,
    /// The path came from `RECIPEBOX_DATA_FILE`.
    EnvVar,
    /// Fallback default (`./data/recipes.json`).
    Default,
}

impl DataFileSource {
    /// Short label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env",
            Self::Default => "default",
        }
    }
}

/// Resolution result for the data file.
#[derive(Debug, Clone)]
pub struct DataFileResolution {
    /// Absolute path to the JSON file.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DataFileSource,
}

/// Resolve the data file from an explicit override, env var, or default.
pub fn resolve_data_file(explicit: Option<&Path>) -> Result<DataFileResolution, PathError> {
    if let Some(path) = explicit {
        return Ok(DataFileResolution {
            path: normalize_user_path(&path.to_string_lossy())?,
            source: DataFileSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(DATA_FILE_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(DataFileResolution {
                path: normalize_user_path(&env_path)?,
                source: DataFileSource::EnvVar,
            });
        }
    }

    Ok(DataFileResolution {
        path: normalize_user_path(DEFAULT_DATA_FILE_RELATIVE)?,
        source: DataFileSource::Default,
    })
}

/// Expand `~` and make the path absolute against the working directory.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
