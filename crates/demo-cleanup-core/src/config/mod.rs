//! # Configuration System
//!
//! Hierarchical TOML configuration for demo-cleanup.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.demo-cleanup/config.toml`
//! 3. **Project config** - `./.demo-cleanup/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use demo_cleanup_core::config::DemoCleanupConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DemoCleanupConfig::load_hierarchy()?;
//!     let days = config.max_age_days(None);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

use std::path::PathBuf;

// Public API exports
pub use types::{CleanupSettings, DemoCleanupConfig};

impl DemoCleanupConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Resolve the directory to scan, preferring an explicit CLI value.
    pub fn scan_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.cleanup.path.clone())
            .unwrap_or_else(defaults::default_scan_path)
    }

    /// Resolve the age threshold, preferring an explicit CLI value.
    pub fn max_age_days(&self, cli_override: Option<u64>) -> u64 {
        cli_override
            .or(self.cleanup.days)
            .unwrap_or(defaults::DEFAULT_MAX_AGE_DAYS)
    }
}
