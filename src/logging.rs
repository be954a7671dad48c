//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout stays free for the
//! completion message. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber for the CLI
///
/// Safe to call more than once; later calls are ignored.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "rust_league_ranker=debug,info"
    } else {
        "rust_league_ranker=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
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
        .try_init();
}
