use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("demo-cleanup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete old demo recordings from a directory tree")
        .long_about("demo-cleanup walks a directory tree and removes .dem recordings whose last modification is older than the given number of days. Use --dry-run to see what would be removed without touching anything.")
        .disable_version_flag(true)
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("DIR")
                .help("Root directory to scan (default: ./tmp_demos, or cleanup.path from config)")
        )
        .arg(
            Arg::new("days")
                .long("days")
                .value_name("N")
                .help("Delete files older than N days (default: 7, or cleanup.days from config)")
                .value_parser(clap::value_parser!(u64))
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be deleted without deleting")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
        )
}
