//! Logging set-up
//!
//! Diagnostics go to stderr through `tracing` so they never mix with menu
//! output on stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used unless `RUST_LOG` is set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "energy=debug,energy_tracker=debug"
    } else {
        "energy=warn,energy_tracker=warn"
    }
}

/// Install the global subscriber for the command-line binary
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
