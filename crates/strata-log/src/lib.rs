//! Structured logging for the strata tools.
//!
//! Console logging via the `tracing` ecosystem: timestamps, module paths,
//! and severity filtering. Respects `RUST_LOG`, with an optional level
//! override from the configuration system.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The filter is resolved in precedence order: the `RUST_LOG` environment
/// variable, then `level_override` (typically the config file's
/// `debug.log_level`), then `"info"`. Call once per process.
pub fn init_logging(level_override: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(level_override)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// The fallback filter directive used when `RUST_LOG` is unset.
fn filter_string(level_override: Option<&str>) -> String {
    match level_override {
        Some(level) if !level.is_empty() => level.to_string(),
        _ => "info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string_uses_override() {
        assert_eq!(filter_string(Some("debug")), "debug");
        assert_eq!(filter_string(Some("warn,strata_terrain=trace")), "warn,strata_terrain=trace");
    }

    #[test]
    fn test_filter_string_defaults_to_info() {
        assert_eq!(filter_string(None), "info");
        assert_eq!(filter_string(Some("")), "info");
    }

    #[test]
    fn test_filter_strings_parse_as_env_filters() {
        for directive in ["info", "debug", "warn,strata_terrain=trace"] {
            assert!(
                directive.parse::<EnvFilter>().is_ok(),
                "directive {directive:?} should parse"
            );
        }
    }
}
