//! Tracing setup shared by the command-line tools.
//!
//! Report output goes to stdout; all logging stays on stderr so the two
//! streams can be piped independently.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Call once, at the top of `main`.
///
/// `RUST_LOG` is honored when set; `verbose` raises the crate to debug.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tu_inspect=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tu_inspect=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
