use chrono::{DateTime, Days, Local, TimeDelta, TimeZone};
use std::path::Path;
use std::time::SystemTime;

use crate::cleanup::errors::CleanupError;
use crate::cleanup::types::TARGET_EXTENSION;

/// Compute the fixed cutoff for a run: `now` minus `max_age_days` calendar days.
///
/// Calendar arithmetic is done on local wall-clock time. When the resulting
/// local time is ambiguous the earlier instant wins; when it falls in a DST
/// gap the cutoff is computed as an exact 24h-per-day offset instead.
pub fn compute_cutoff(
    now: DateTime<Local>,
    max_age_days: u64,
) -> Result<SystemTime, CleanupError> {
    let out_of_range = || CleanupError::InvalidMaxAge { days: max_age_days };

    let naive = now
        .naive_local()
        .checked_sub_days(Days::new(max_age_days))
        .ok_or_else(out_of_range)?;

    let cutoff = Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            let days = i64::try_from(max_age_days).ok()?;
            now.checked_sub_signed(TimeDelta::try_days(days)?)
        })
        .ok_or_else(out_of_range)?;

    Ok(SystemTime::from(cutoff))
}

/// Whether the path carries the recording extension. Case-sensitive.
///
/// A file named exactly `.dem` counts too: its suffix after the last dot is
/// the extension even though `Path::extension` treats it as a bare dotfile.
pub fn is_target_recording(path: &Path) -> bool {
    if path.extension().is_some_and(|ext| ext == TARGET_EXTENSION) {
        return true;
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix('.'))
        .is_some_and(|rest| rest == TARGET_EXTENSION)
}

/// Strictly-before comparison against the run's cutoff.
pub fn is_expired(modified: SystemTime, cutoff: SystemTime) -> bool {
    modified < cutoff
}

pub fn remove_recording(path: &Path) -> Result<(), CleanupError> {
    std::fs::remove_file(path).map_err(|e| CleanupError::DeleteFailed {
        path: path.display().to_string(),
        source: e,
    })
}
