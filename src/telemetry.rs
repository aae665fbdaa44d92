//! Tracing setup for the binary

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used by one-shot commands when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: &str = "warn";

/// The full-screen UI owns the terminal, so it logs nothing unless asked
pub const BROWSE_LEVEL: &str = "off";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, else `level`
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
