//! Console rendering of a cleanup run.
//!
//! Report lines go to stdout; deletion errors go to stderr.

use std::path::Path;

use demo_cleanup_core::cleanup::{CleanupError, CleanupReporter, CleanupStats, format_mb};

/// Prints one line per matching file as the walk progresses.
pub struct ConsoleReporter;

impl CleanupReporter for ConsoleReporter {
    fn would_delete(&mut self, path: &Path, size_bytes: u64) {
        println!("{}", would_delete_line(path, size_bytes));
    }

    fn deleted(&mut self, path: &Path, size_bytes: u64) {
        println!("{}", deleted_line(path, size_bytes));
    }

    fn delete_failed(&mut self, path: &Path, error: &CleanupError) {
        match error {
            CleanupError::DeleteFailed { source, .. } => {
                eprintln!("Error deleting {}: {}", path.display(), source)
            }
            other => eprintln!("Error deleting {}: {}", path.display(), other),
        }
    }
}

pub fn header_lines(path: &Path, days: u64, dry_run: bool) -> Vec<String> {
    let mut lines = vec![
        format!("Scanning: {}", path.display()),
        format!("Deleting files older than {} days", days),
    ];
    if dry_run {
        lines.push("DRY RUN MODE - no files will be deleted".to_string());
    }
    lines
}

pub fn summary_lines(stats: &CleanupStats) -> Vec<String> {
    vec![
        String::new(),
        "Summary:".to_string(),
        format!("Total files scanned: {}", stats.total_files),
        format!("Files deleted: {}", stats.deleted_files),
        format!("Space freed: {} MB", stats.freed_mb()),
    ]
}

fn would_delete_line(path: &Path, size_bytes: u64) -> String {
    format!("Would delete: {} ({} MB)", path.display(), format_mb(size_bytes))
}

fn deleted_line(path: &Path, size_bytes: u64) -> String {
    format!("Deleted: {} ({} MB)", path.display(), format_mb(size_bytes))
}
