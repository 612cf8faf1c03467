use tracing::{error, info, warn};

use crate::cleanup::{CleanupError, CleanupRequest, CleanupStats};
use crate::errors::{ConfigError, DemoCleanupError};

/// Resolved settings for the run about to start.
pub fn log_run_requested(request: &CleanupRequest) {
    info!(
        event = "core.app.run_requested",
        version = env!("CARGO_PKG_VERSION"),
        path = %request.root.display(),
        days = request.max_age_days,
        dry_run = request.dry_run
    );
}

pub fn log_run_completed(stats: &CleanupStats) {
    info!(
        event = "core.app.run_completed",
        total_files = stats.total_files,
        deleted_files = stats.deleted_files,
        freed_bytes = stats.freed_bytes,
        freed_mb = %stats.freed_mb()
    );
}

/// A run that stopped before producing a summary.
pub fn log_run_failed(error: &CleanupError) {
    log_failure("core.app.run_failed", error);
}

/// Config files were unusable and built-in defaults are in effect.
pub fn log_config_fallback(error: &ConfigError) {
    log_failure("core.app.config_fallback", error);
}

// User errors (bad path, bad config file) are warnings; the rest are errors
fn log_failure(event: &'static str, error: &dyn DemoCleanupError) {
    if error.is_user_error() {
        warn!(
            event = event,
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = event,
            error_code = error.error_code(),
            error = %error
        );
    }
}
