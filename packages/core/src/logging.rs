use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `TraceLayer` emits request and
/// response events at debug level, so `tower_http` is raised to debug.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Initialize structured logging for the service.
///
/// This must be called once at startup (in main.rs).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Logging initialized");
}
