//! Tracing subscriber setup.

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence, then `verbose`, then `configured_level`.
/// Calling this more than once keeps the first subscriber.
pub fn init(verbose: bool, configured_level: &str) {
    let mut rejected = None;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { configured_level };
        EnvFilter::try_new(directive).unwrap_or_else(|err| {
            rejected = Some(err.to_string());
            EnvFilter::new("warn")
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(reason) = rejected {
        warn!(configured = configured_level, %reason, "invalid log level in config, using warn");
    }
}
