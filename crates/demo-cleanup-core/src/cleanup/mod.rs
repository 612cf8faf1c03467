pub mod errors;
pub mod handler;
mod operations;
pub mod types;

// Public API exports
pub use errors::CleanupError;
pub use handler::{run_cleanup, run_cleanup_with_cutoff};
pub use types::{
    CleanupReporter, CleanupRequest, CleanupStats, TARGET_EXTENSION, format_mb,
};
