use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; the settings flag
/// raises it to `debug`, in which case `RUST_LOG` may override it.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Ignore RUST_LOG when debug logging is off so a stray
        // environment variable cannot make the launcher chatty.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
