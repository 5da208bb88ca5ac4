use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging on stderr.
///
/// Status lines for the user go to stdout separately; this only carries
/// `RUST_LOG`-filtered diagnostics, quiet (`warn`) by default.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
