//! Diagnostic tracing.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
//! form so it never mixes with the interview on stdout.
//!
//! ```bash
//! RUST_LOG=daily_review=debug daily-review
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
