//! Built-in fallback values used when neither a config file nor a CLI flag
//! provides a setting.

use std::path::PathBuf;

/// Directory scanned when no path is configured.
pub const DEFAULT_SCAN_PATH: &str = "./tmp_demos";

/// Age threshold in days when none is configured.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 7;

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR_NAME: &str = ".demo-cleanup";

/// File name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_scan_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCAN_PATH)
}
