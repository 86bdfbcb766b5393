//! Logging initialization.
//!
//! Builds a `tracing` subscriber from the logging section of the
//! configuration. Hosts embedding docwords call this once at startup;
//! library code only emits events.

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `config` - Logging settings (level, timestamps)
pub fn init_logging(config: &LoggingConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.level.to_tracing_level())
        .with_target(false);

    // Configure timestamps
    if config.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
