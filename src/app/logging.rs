use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `unitparams=debug`.
pub const LOG_ENV: &str = "UNITPARAMS_LOG";

/// Install the stderr subscriber. `verbose` forces debug output.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
