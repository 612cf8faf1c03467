//! demo-cleanup-core: Core library for removing old demo recordings
//!
//! This library walks a directory tree, finds `.dem` recordings whose last
//! modification precedes a cutoff, and either reports or deletes them. It is
//! used by the `demo-cleanup` CLI.
//!
//! # Main Entry Points
//!
//! - [`cleanup`] - Run a cleanup pass and collect statistics
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup

pub mod cleanup;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use cleanup::types::{CleanupRequest, CleanupStats};
pub use cleanup::{CleanupError, CleanupReporter};
pub use config::DemoCleanupConfig;
pub use errors::{ConfigError, DemoCleanupError};

// Re-export logging initialization
pub use logging::init_logging;
