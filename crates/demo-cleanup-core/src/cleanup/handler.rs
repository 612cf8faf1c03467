use chrono::Local;
use std::time::SystemTime;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::cleanup::{errors::CleanupError, operations, types::*};

/// Run a cleanup pass over `request.root`.
///
/// The cutoff is computed once from the current local time before the walk
/// starts.
///
/// # Returns
/// * `Ok(CleanupStats)` - Counters for the completed walk
/// * `Err(CleanupError)` - If the tree could not be traversed; no stats are produced
pub fn run_cleanup(
    request: &CleanupRequest,
    reporter: &mut dyn CleanupReporter,
) -> Result<CleanupStats, CleanupError> {
    let cutoff = operations::compute_cutoff(Local::now(), request.max_age_days)?;

    info!(
        event = "core.cleanup.cutoff_computed",
        max_age_days = request.max_age_days,
        cutoff = %chrono::DateTime::<Local>::from(cutoff).to_rfc3339()
    );

    run_cleanup_with_cutoff(request, cutoff, reporter)
}

/// Run a cleanup pass against an already computed cutoff.
///
/// Entries are visited depth-first, sorted by file name within each directory.
/// Any traversal or metadata failure aborts the run and is returned to the
/// caller, which owns reporting it. A failed deletion is
/// handed to the reporter and the walk continues.
pub fn run_cleanup_with_cutoff(
    request: &CleanupRequest,
    cutoff: SystemTime,
    reporter: &mut dyn CleanupReporter,
) -> Result<CleanupStats, CleanupError> {
    info!(
        event = "core.cleanup.run_started",
        root = %request.root.display(),
        max_age_days = request.max_age_days,
        dry_run = request.dry_run
    );

    let mut stats = CleanupStats::new();

    for entry in WalkDir::new(&request.root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .unwrap_or(request.root.as_path())
                .display()
                .to_string();
            CleanupError::TraversalFailed { path, source: e }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let metadata_error = |source: std::io::Error| CleanupError::MetadataUnreadable {
            path: path.display().to_string(),
            source,
        };

        // Every visited entry must be readable, not only recordings
        let metadata = entry.metadata().map_err(|e| metadata_error(e.into()))?;

        stats.record_file();

        if !operations::is_target_recording(path) {
            continue;
        }

        let modified = metadata.modified().map_err(metadata_error)?;

        if !operations::is_expired(modified, cutoff) {
            continue;
        }

        let size = metadata.len();
        info!(
            event = "core.cleanup.file_matched",
            path = %path.display(),
            size_bytes = size,
            dry_run = request.dry_run
        );

        if request.dry_run {
            reporter.would_delete(path, size);
            continue;
        }

        match operations::remove_recording(path) {
            Ok(()) => {
                stats.record_deleted(size);
                info!(
                    event = "core.cleanup.file_deleted",
                    path = %path.display(),
                    size_bytes = size
                );
                reporter.deleted(path, size);
            }
            Err(e) => {
                warn!(
                    event = "core.cleanup.delete_failed",
                    path = %path.display(),
                    error = %e
                );
                reporter.delete_failed(path, &e);
            }
        }
    }

    info!(
        event = "core.cleanup.run_completed",
        total_files = stats.total_files,
        deleted_files = stats.deleted_files,
        freed_bytes = stats.freed_bytes
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);
    const MB: u64 = 1024 * 1024;

    #[derive(Debug, Default)]
    struct RecordingReporter {
        would_delete: Vec<(PathBuf, u64)>,
        deleted: Vec<(PathBuf, u64)>,
        failed: Vec<PathBuf>,
    }

    impl CleanupReporter for RecordingReporter {
        fn would_delete(&mut self, path: &Path, size_bytes: u64) {
            self.would_delete.push((path.to_path_buf(), size_bytes));
        }

        fn deleted(&mut self, path: &Path, size_bytes: u64) {
            self.deleted.push((path.to_path_buf(), size_bytes));
        }

        fn delete_failed(&mut self, path: &Path, _error: &CleanupError) {
            self.failed.push(path.to_path_buf());
        }
    }

    fn write_aged(path: &Path, size: u64, age_days: u32) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        file.set_len(size).unwrap();
        file.set_modified(SystemTime::now() - DAY * age_days).unwrap();
    }

    /// a.dem (9 days, 2 MB), b.dem (2 days, 1 MB), c.txt (9 days)
    fn scenario_tree() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        write_aged(&temp_dir.path().join("a.dem"), 2 * MB, 9);
        write_aged(&temp_dir.path().join("b.dem"), MB, 2);
        write_aged(&temp_dir.path().join("c.txt"), 10, 9);
        temp_dir
    }

    #[test]
    fn test_dry_run_reports_only_old_recordings() {
        let temp_dir = scenario_tree();
        let request = CleanupRequest::new(temp_dir.path(), 7, true);
        let mut reporter = RecordingReporter::default();

        let stats = run_cleanup(&request, &mut reporter).unwrap();

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.deleted_files, 0);
        assert_eq!(stats.freed_bytes, 0);
        assert_eq!(
            reporter.would_delete,
            vec![(temp_dir.path().join("a.dem"), 2 * MB)]
        );
        assert!(reporter.deleted.is_empty());
        assert!(temp_dir.path().join("a.dem").exists());
    }

    #[test]
    fn test_live_run_deletes_only_old_recordings() {
        let temp_dir = scenario_tree();
        let request = CleanupRequest::new(temp_dir.path(), 7, false);
        let mut reporter = RecordingReporter::default();

        let stats = run_cleanup(&request, &mut reporter).unwrap();

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.deleted_files, 1);
        assert_eq!(stats.freed_bytes, 2 * MB);
        assert_eq!(stats.freed_mb(), "2.00");
        assert_eq!(reporter.deleted, vec![(temp_dir.path().join("a.dem"), 2 * MB)]);
        assert!(!temp_dir.path().join("a.dem").exists());
        assert!(temp_dir.path().join("b.dem").exists());
        assert!(temp_dir.path().join("c.txt").exists());
    }

    #[test]
    fn test_second_live_run_deletes_nothing() {
        let temp_dir = scenario_tree();
        let request = CleanupRequest::new(temp_dir.path(), 7, false);

        let first = run_cleanup(&request, &mut RecordingReporter::default()).unwrap();
        assert_eq!(first.deleted_files, 1);

        let mut reporter = RecordingReporter::default();
        let second = run_cleanup(&request, &mut reporter).unwrap();
        assert_eq!(second.total_files, 2);
        assert_eq!(second.deleted_files, 0);
        assert_eq!(second.freed_bytes, 0);
        assert!(reporter.deleted.is_empty());
    }

    #[test]
    fn test_nested_directories_are_walked_but_not_counted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_aged(&root.join("x/y/deep.dem"), 100, 30);
        write_aged(&root.join("x/fresh.dem"), 100, 0);
        fs::create_dir_all(root.join("empty")).unwrap();

        let mut reporter = RecordingReporter::default();
        let stats = run_cleanup(&CleanupRequest::new(root, 7, false), &mut reporter).unwrap();

        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.deleted_files, 1);
        assert_eq!(stats.freed_bytes, 100);
        assert!(!root.join("x/y/deep.dem").exists());
        assert!(root.join("x/fresh.dem").exists());
        assert!(root.join("x/y").is_dir());
    }

    #[test]
    fn test_visit_order_is_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in ["c.dem", "a.dem", "b.dem"] {
            write_aged(&temp_dir.path().join(name), 1, 10);
        }

        let mut reporter = RecordingReporter::default();
        run_cleanup(&CleanupRequest::new(temp_dir.path(), 1, true), &mut reporter).unwrap();

        let names: Vec<_> = reporter
            .would_delete
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.dem", "b.dem", "c.dem"]);
    }

    #[test]
    fn test_cutoff_is_strict() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("edge.dem");
        write_aged(&path, 1, 0);
        let modified = fs::metadata(&path).unwrap().modified().unwrap();

        let request = CleanupRequest::new(temp_dir.path(), 0, false);
        let mut reporter = RecordingReporter::default();

        let stats = run_cleanup_with_cutoff(&request, modified, &mut reporter).unwrap();
        assert_eq!(stats.deleted_files, 0);
        assert!(path.exists());

        let later = modified + Duration::from_secs(1);
        let stats = run_cleanup_with_cutoff(&request, later, &mut reporter).unwrap();
        assert_eq!(stats.deleted_files, 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_root_may_be_a_single_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("lone.dem");
        write_aged(&path, 42, 10);

        let stats = run_cleanup(
            &CleanupRequest::new(&path, 7, false),
            &mut RecordingReporter::default(),
        )
        .unwrap();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.deleted_files, 1);
        assert_eq!(stats.freed_bytes, 42);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = run_cleanup(
            &CleanupRequest::new(&missing, 7, false),
            &mut RecordingReporter::default(),
        );
        match result {
            Err(e @ CleanupError::TraversalFailed { .. }) => {
                assert!(e.to_string().contains("does-not-exist"));
            }
            other => panic!("expected traversal failure, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_dem_dotfile_is_deleted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".dem");
        write_aged(&path, 100, 10);

        let mut reporter = RecordingReporter::default();
        let stats = run_cleanup(
            &CleanupRequest::new(temp_dir.path(), 7, false),
            &mut reporter,
        )
        .unwrap();

        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.deleted_files, 1);
        assert_eq!(stats.freed_bytes, 100);
        assert_eq!(reporter.deleted, vec![(path.clone(), 100)]);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_metadata_aborts_for_any_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let sealed = temp_dir.path().join("sealed");
        write_aged(&sealed.join("notes.txt"), 10, 0);
        write_aged(&temp_dir.path().join("zz.dem"), MB, 10);

        // Listable but not searchable: names are readable, lstat is not
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o600)).unwrap();

        // Root ignores directory permissions; nothing to observe in that case
        if fs::symlink_metadata(sealed.join("notes.txt")).is_ok() {
            fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut reporter = RecordingReporter::default();
        let result = run_cleanup(
            &CleanupRequest::new(temp_dir.path(), 7, false),
            &mut reporter,
        );

        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(
            matches!(
                result,
                Err(CleanupError::MetadataUnreadable { .. })
                    | Err(CleanupError::TraversalFailed { .. })
            ),
            "expected the walk to abort, got {result:?}"
        );
        // The walk stopped before reaching the recording that sorts after it
        assert!(reporter.deleted.is_empty());
        assert!(temp_dir.path().join("zz.dem").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_failure_is_recovered() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let locked = temp_dir.path().join("locked");
        write_aged(&locked.join("stuck.dem"), MB, 10);
        write_aged(&temp_dir.path().join("zz.dem"), MB, 10);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores directory permissions; nothing to observe in that case
        if File::create(locked.join("write-check")).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut reporter = RecordingReporter::default();
        let stats = run_cleanup(
            &CleanupRequest::new(temp_dir.path(), 7, false),
            &mut reporter,
        )
        .unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(reporter.failed, vec![locked.join("stuck.dem")]);
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.deleted_files, 1);
        assert_eq!(stats.freed_bytes, MB);
        assert!(locked.join("stuck.dem").exists());
        assert!(!temp_dir.path().join("zz.dem").exists());
    }
}
