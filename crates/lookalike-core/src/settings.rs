//! Project settings
//!
//! Loaded from a TOML file (camelCase keys), then adjusted by environment
//! variables. CLI flags are applied last by the binary.
//!
//! ```toml
//! snapshotsDir = "cypress/snapshots"
//! screenshotsDir = "cypress/screenshots"
//! updateSnapshots = false
//! continueWhenLooksDifferent = false
//!
//! [defaults]
//! tolerance = 3.0
//! highlightColor = "#00ff00"
//! ```

use crate::errors::{LkError, LkErrorKind, Result, SnapshotError};
use crate::options::MatchOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "lookalike.toml";
pub const DEFAULT_SNAPSHOTS_DIR: &str = "cypress/snapshots";
pub const DEFAULT_SCREENSHOTS_DIR: &str = "cypress/screenshots";

pub const ENV_UPDATE_SNAPSHOTS: &str = "LOOKALIKE_UPDATE_SNAPSHOTS";
pub const ENV_CONTINUE_WHEN_LOOKS_DIFFERENT: &str = "LOOKALIKE_CONTINUE_WHEN_LOOKS_DIFFERENT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Settings {
    /// Root of the baseline tree
    pub snapshots_dir: PathBuf,
    /// Root the capture step writes screenshots under; its sub-directory
    /// structure is mirrored below `snapshots_dir`
    pub screenshots_dir: PathBuf,
    /// Adopt mismatching screenshots as new baselines
    pub update_snapshots: bool,
    /// Report mismatches without failing the assertion
    pub continue_when_looks_different: bool,
    /// Lowest-precedence match option layer
    pub defaults: MatchOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshots_dir: PathBuf::from(DEFAULT_SNAPSHOTS_DIR),
            screenshots_dir: PathBuf::from(DEFAULT_SCREENSHOTS_DIR),
            update_snapshots: false,
            continue_when_looks_different: false,
            defaults: MatchOptions::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; `origin` is only used in errors
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self> {
        let settings: Settings =
            toml::from_str(raw).map_err(|e| SnapshotError::InvalidSettings {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        settings
            .defaults
            .validate()
            .map_err(|e| LkError::new(LkErrorKind::Config).with_path(origin).with_source(e))?;
        Ok(settings)
    }

    /// Load settings from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LkError::new(LkErrorKind::Config)
                .with_op("load_settings")
                .with_path(path)
                .with_message(e.to_string())
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// Load `path` when given (must exist), else the default file if present,
    /// else built-in defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::load(explicit),
            None => {
                let fallback = Path::new(DEFAULT_SETTINGS_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_UPDATE_SNAPSHOTS) {
            self.update_snapshots = parse_flag(ENV_UPDATE_SNAPSHOTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CONTINUE_WHEN_LOOKS_DIFFERENT) {
            self.continue_when_looks_different =
                parse_flag(ENV_CONTINUE_WHEN_LOOKS_DIFFERENT, &raw)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LkError::new(LkErrorKind::Config)
            .with_op("apply_env")
            .with_message(format!("{} has unrecognised boolean value '{}'", key, other))),
    }
}
