//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Logs go to stderr so they never mix with rendered output.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GRIMOIRE_LOG";

/// Install the global subscriber.
///
/// Level precedence: `log_level`, then `debug` when `verbose`, then
/// `RUST_LOG`, then `GRIMOIRE_LOG`, else `warn`.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match flag_level(verbose, log_level) {
        Some(level) => EnvFilter::try_new(directive(level))?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
            .unwrap_or_else(|_| EnvFilter::new(directive("warn"))),
    };

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Level requested on the command line, if any.
fn flag_level(verbose: bool, log_level: Option<&str>) -> Option<&str> {
    match (verbose, log_level) {
        (_, Some(level)) => Some(level),
        (true, None) => Some("debug"),
        (false, None) => None,
    }
}

/// Bare levels apply to this crate only; full directives pass through.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("grimoire={}", level)
    }
}
