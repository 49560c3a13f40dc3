// Quarterly sales dashboard: dataset server and aggregating client
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// `RUST_LOG` when set, `info` otherwise.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
