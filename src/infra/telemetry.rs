use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber. Honors `RUST_LOG`, defaults to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
