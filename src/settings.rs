use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::filter::Filter;

pub const DEFAULT_LOG_FILTER: &str = "snapshop=info";

/// User-level configuration, read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory a new session browses from (default: ".")
    pub start_directory: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset (default: "snapshop=info")
    pub log_filter: String,
    /// Create missing parent directories on save (default: true)
    pub create_missing_dirs: bool,
    /// Filters applied when none are named explicitly (default: none)
    pub default_filters: Vec<Filter>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_directory: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            create_missing_dirs: true,
            default_filters: Vec::new(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read settings when a path is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
