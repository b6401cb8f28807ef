//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`
const VERBOSE_FILTER: &str = "proportion_core=trace,proportion_gui=debug,proportion=debug,info";
/// Filter used when neither `--verbose` nor a config file sets one
const QUIET_FILTER: &str = "warn";

/// Pick the filter used when `RUST_LOG` is unset. `--verbose` wins over
/// the config file's `log_filter`.
pub fn fallback_filter(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else {
        configured.unwrap_or(QUIET_FILTER)
    }
}

/// Install the global subscriber, writing to stderr so command output on
/// stdout stays clean.
pub fn init(verbose: bool, configured: Option<&str>) {
    let fallback = fallback_filter(verbose, configured);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(QUIET_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_filter_used_when_not_verbose() {
        assert_eq!(fallback_filter(false, Some("debug")), "debug");
    }

    #[test]
    fn test_verbose_overrides_config_filter() {
        assert_eq!(fallback_filter(true, Some("error")), VERBOSE_FILTER);
    }

    #[test]
    fn test_quiet_without_config() {
        assert_eq!(fallback_filter(false, None), QUIET_FILTER);
    }
}
