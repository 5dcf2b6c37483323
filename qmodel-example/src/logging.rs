//! Diagnostics for the example wizard.
//!
//! Engine events (visited nodes, skips, back navigation) are emitted through
//! `tracing` and only shown when `RUST_LOG` asks for them. Prompts and the final
//! answers go to the terminal as usual.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format, so it does not mix with the JSON on stdout.
///
/// # Example
/// ```bash
/// RUST_LOG=qmodel=debug cargo run -p qmodel-example
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
