//! Diagnostic logging setup
//!
//! Progress lines go to stdout through the UI layer; everything here is
//! diagnostics on stderr, filtered by `RUST_LOG` when it is set.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "deskpack=debug" } else { "warn" }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
