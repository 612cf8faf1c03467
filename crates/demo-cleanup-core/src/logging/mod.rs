use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the tool's own targets.
///
/// Quiet runs keep only errors so the console report stays readable; `-v`
/// lets the per-file info events through.
pub fn log_directive(quiet: bool) -> &'static str {
    if quiet {
        "demo_cleanup=error"
    } else {
        "demo_cleanup=info"
    }
}

/// Install the global subscriber: JSON lines on stderr, filtered by
/// `RUST_LOG` plus [`log_directive`]. Stdout is reserved for the report.
///
/// Only the first call in a process takes effect.
pub fn init_logging(quiet: bool) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = log_directive(quiet).parse() {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}
