// File: crates/linechart-examples/src/lib.rs
// Summary: Shared setup for the example binaries.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Where the examples write their PNGs.
pub fn out_path(file: &str) -> PathBuf {
    PathBuf::from("target/out").join(file)
}
