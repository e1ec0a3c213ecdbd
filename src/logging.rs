//! Tracing setup for applications embedding foldkit.
//!
//! Library code only emits `tracing` events (fold selection, children moved
//! below the fold, position fallbacks). Applications that do not install
//! their own subscriber can call [`install_tracing`] once at startup.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INSTALLED: Once = Once::new();

/// Install a formatted `tracing` subscriber (idempotent).
///
/// `RUST_LOG` wins over `default_filter` when set. If another subscriber is
/// already installed globally the call reports it on stderr and leaves the
/// existing one in place.
pub fn install_tracing(default_filter: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

        let console = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("foldkit tracing subscriber failed to initialize");
        }
    });
}

/// Install a subscriber using the filter from a loaded configuration.
pub fn install_from_config(config: &crate::FoldConfig) {
    install_tracing(&config.log_filter);
}
