use std::path::{Path, PathBuf};

use crate::cleanup::errors::CleanupError;

/// Extension (without the dot) of the recordings subject to cleanup.
pub const TARGET_EXTENSION: &str = "dem";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Settings for a single cleanup run. Immutable once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupRequest {
    pub root: PathBuf,
    pub max_age_days: u64,
    pub dry_run: bool,
}

impl CleanupRequest {
    pub fn new(root: impl Into<PathBuf>, max_age_days: u64, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            max_age_days,
            dry_run,
        }
    }
}

/// Counters accumulated over one run.
///
/// `deleted_files <= total_files` always holds, and `freed_bytes` is the sum
/// of the sizes of exactly the files counted in `deleted_files`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupStats {
    pub total_files: u64,
    pub deleted_files: u64,
    pub freed_bytes: u64,
}

impl CleanupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self) {
        self.total_files += 1;
    }

    pub fn record_deleted(&mut self, size_bytes: u64) {
        self.deleted_files += 1;
        self.freed_bytes += size_bytes;
    }

    pub fn freed_mb(&self) -> String {
        format_mb(self.freed_bytes)
    }
}

/// Receives per-file outcomes as the walk progresses, in visit order.
pub trait CleanupReporter {
    /// A matching file was found during a dry run.
    fn would_delete(&mut self, path: &Path, size_bytes: u64);

    /// A matching file was removed.
    fn deleted(&mut self, path: &Path, size_bytes: u64);

    /// A matching file could not be removed; the run continues.
    fn delete_failed(&mut self, path: &Path, error: &CleanupError);
}

/// Render a byte count as megabytes with two decimals.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}
