#![forbid(unsafe_code)]

//! Environment-driven storage overrides.
//!
//! None of these are needed for normal operation; they let a user swap the
//! built-in rule tables for a document on disk, or dump the active tables
//! for inspection.

use std::path::PathBuf;

/// Path of a rule-table document to load instead of the built-in tables.
pub const ENV_LOAD_PATH: &str = "GTKPAL_JSON";
/// Path to write the active rule tables to once they are built or loaded.
pub const ENV_SAVE_PATH: &str = "GTKPAL_JSON_SAVEPATH";
/// Resolve native sources to fixed brushes before saving (`1/0/true/false`).
pub const ENV_HARDCODED: &str = "GTKPAL_JSON_HARDCODED";

/// Overrides applied when the rule tables are (re)built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub load_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub hardcoded: bool,
}

impl StorageConfig {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read overrides through a custom lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| {
            get_env(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            load_path: path(ENV_LOAD_PATH),
            save_path: path(ENV_SAVE_PATH),
            hardcoded: get_env(ENV_HARDCODED)
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(false),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
