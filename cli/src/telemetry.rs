//! Log setup for the command line driver

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `-v` picks the level.
pub fn init(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
