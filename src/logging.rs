//! Tracing setup for the binaries.
//!
//! Logs always go to stderr; stdout carries only scenario output.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` overrides `level` when set.
/// Only the first call in a process takes effect.
pub fn init(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok();
    }
}

/// Level for `-v` repeated `verbose` times, starting from the configured one.
pub fn verbosity(configured: Level, verbose: u8) -> Level {
    match verbose {
        0 => configured,
        1 => Level::INFO.max(configured),
        2 => Level::DEBUG.max(configured),
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        assert_eq!(verbosity(Level::WARN, 0), Level::WARN);
        assert_eq!(verbosity(Level::WARN, 1), Level::INFO);
        assert_eq!(verbosity(Level::WARN, 2), Level::DEBUG);
        assert_eq!(verbosity(Level::ERROR, 5), Level::TRACE);
        assert_eq!(verbosity(Level::DEBUG, 1), Level::DEBUG);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false, Level::ERROR);
        init(true, Level::ERROR);
    }
}
