use clap::ArgMatches;
use std::path::PathBuf;

use demo_cleanup_core::DemoCleanupConfig;
use demo_cleanup_core::cleanup::{self, CleanupError, CleanupRequest};
use demo_cleanup_core::events;

use crate::console::{self, ConsoleReporter};

pub fn run_command(matches: &ArgMatches) -> Result<(), CleanupError> {
    if matches.get_flag("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = load_config_with_warning();
    let request = CleanupRequest::new(
        config.scan_path(matches.get_one::<String>("path").map(PathBuf::from)),
        config.max_age_days(matches.get_one::<u64>("days").copied()),
        matches.get_flag("dry-run"),
    );

    handle_cleanup(&request)
}

/// Load config, falling back to defaults with a warning on stderr.
fn load_config_with_warning() -> DemoCleanupConfig {
    match DemoCleanupConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            eprintln!(
                "Tip: Check ~/.demo-cleanup/config.toml and ./.demo-cleanup/config.toml for syntax errors."
            );
            events::log_config_fallback(&e);
            DemoCleanupConfig::default()
        }
    }
}

fn handle_cleanup(request: &CleanupRequest) -> Result<(), CleanupError> {
    events::log_run_requested(request);

    for line in console::header_lines(&request.root, request.max_age_days, request.dry_run) {
        println!("{}", line);
    }

    match cleanup::run_cleanup(request, &mut ConsoleReporter) {
        Ok(stats) => {
            for line in console::summary_lines(&stats) {
                println!("{}", line);
            }
            events::log_run_completed(&stats);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Cleanup failed: {}", e);
            events::log_run_failed(&e);
            Err(e)
        }
    }
}
