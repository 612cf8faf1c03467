//! Configuration type definitions for demo-cleanup.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [cleanup]
//! path = "/srv/cs2/demos"
//! days = 14
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.demo-cleanup/config.toml`
/// 2. Project config: `./.demo-cleanup/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DemoCleanupConfig {
    /// Defaults for a cleanup run
    #[serde(default)]
    pub cleanup: CleanupSettings,
}

/// Defaults for the `--path` and `--days` flags.
///
/// Unset values fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CleanupSettings {
    /// Root directory to scan
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Age threshold in days
    #[serde(default)]
    pub days: Option<u64>,
}
