//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`
const VERBOSE_FILTER: &str = "proportion_core=trace,proportion_gui=debug,info";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects the debug
/// filter and `filter` (from the config file) is used as is.
pub fn init(filter: &str, verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { filter };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init();
}
