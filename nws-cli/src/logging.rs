use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins over `--debug`.
pub fn init(debug: bool) {
    let default = if debug { "warn,nws=debug,nws_core=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}
