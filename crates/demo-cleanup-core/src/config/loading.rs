//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - `./tmp_demos`, 7 days
//! 2. **User config** - `~/.demo-cleanup/config.toml`
//! 3. **Project config** - `./.demo-cleanup/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{CleanupSettings, DemoCleanupConfig};
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if the merged configuration is invalid. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DemoCleanupConfig, ConfigError> {
    let project_dir = std::env::current_dir().map_err(|e| ConfigError::ReadFailed {
        path: ".".to_string(),
        source: e,
    })?;
    load_hierarchy_from(dirs::home_dir().as_deref(), &project_dir)
}

/// Load configuration using explicit home and project directories.
pub fn load_hierarchy_from(
    home_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<DemoCleanupConfig, ConfigError> {
    let mut config = DemoCleanupConfig::default();

    if let Some(home_dir) = home_dir
        && let Some(user_config) = load_optional_config(&config_path(home_dir))?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_optional_config(&config_path(project_dir))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        path = ?config.cleanup.path,
        days = ?config.cleanup.days
    );

    Ok(config)
}

/// Path of the config file under a home or project directory.
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

fn load_optional_config(path: &Path) -> Result<Option<DemoCleanupConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(path, &content).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            Ok(None)
        }
        Err(e) => Err(ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

fn parse_config(path: &Path, content: &str) -> Result<DemoCleanupConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(
    base: DemoCleanupConfig,
    override_config: DemoCleanupConfig,
) -> DemoCleanupConfig {
    DemoCleanupConfig {
        cleanup: CleanupSettings {
            path: override_config.cleanup.path.or(base.cleanup.path),
            days: override_config.cleanup.days.or(base.cleanup.days),
        },
    }
}

/// Reject configurations that can never produce a usable run.
pub fn validate_config(config: &DemoCleanupConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.cleanup.path
        && path.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "cleanup.path must not be empty".to_string(),
        });
    }
    Ok(())
}
