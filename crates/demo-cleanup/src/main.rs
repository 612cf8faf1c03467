use std::process::ExitCode;

use demo_cleanup_core::init_logging;

mod app;
mod commands;
mod console;

fn main() -> ExitCode {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless --verbose, so stdout and stderr stay readable
    let quiet = !matches.get_flag("verbose");
    init_logging(quiet);

    // Failures are already reported on stderr by the command
    match commands::run_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
