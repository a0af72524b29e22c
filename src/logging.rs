use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber for host binaries and tests.
///
/// Uses `RUST_LOG` when set, otherwise `default_directive`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
