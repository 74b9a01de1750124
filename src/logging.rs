//! Diagnostic logging
//!
//! Diagnostics go to stderr so they never mix with command output. The
//! level comes from `EXPENSIO_LOG` (an `EnvFilter` directive such as
//! `debug` or `expensio::services=trace`), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSIO_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LEVEL);
    }

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber
///
/// `verbose` overrides `EXPENSIO_LOG` with `debug`. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_logging(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(verbose))
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter() {
        assert_eq!(build_filter(true).to_string(), "debug");
    }

    #[test]
    fn test_init_twice() {
        init_logging(false);
        init_logging(true);
    }
}
