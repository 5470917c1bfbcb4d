//! Diagnostic tracing for the walkthrough binary.
//!
//! The walkthrough's own output goes to stdout through a
//! [`Sink`](veneer_core::Sink). Tracing is separate: it reads `VENEER_LOG`,
//! defaults to `warn`, and writes to stderr so it never mixes into the
//! transcript.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "VENEER_LOG";

/// Initialize the tracing subscriber.
///
/// # Example
/// ```bash
/// VENEER_LOG=veneer_core=debug cargo run -p veneer-lessons
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
