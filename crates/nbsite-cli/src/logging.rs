//! Diagnostic logging shared by the binaries.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! confirmations the tools print. Verbosity follows `RUST_LOG`
//! (e.g. `RUST_LOG=nbsite_sidebar=debug` lists every skipped TOC entry).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (tests driving `run` in-process) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
