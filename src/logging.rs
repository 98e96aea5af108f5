use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn setup_tracing_logger(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy();

    // a subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
