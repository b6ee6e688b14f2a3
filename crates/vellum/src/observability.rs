//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only generated content.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Configuration for a verbosity flag: `debug` when set, `info` otherwise.
    pub fn for_verbosity(verbose: bool) -> Self {
        Self {
            log_level: if verbose { "debug" } else { "info" }.to_string(),
            json_logs: false,
        }
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Filter directive: `RUST_LOG` wins unless verbose output was requested.
    fn filter(&self, verbose_override: bool) -> Result<EnvFilter, Box<dyn std::error::Error>> {
        if verbose_override {
            return Ok(EnvFilter::try_new(&self.log_level)?);
        }
        Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.log_level))?)
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::for_verbosity(false)
    }
}

/// Install the global subscriber.
///
/// `--verbose` forces debug output even when `RUST_LOG` is set.
/// `--json-logs` switches the stderr format to JSON lines.
pub fn init_observability(verbose: bool, json_logs: bool) -> Result<(), Box<dyn std::error::Error>> {
    init_observability_with_config(
        ObservabilityConfig::for_verbosity(verbose).with_json_logs(json_logs),
        verbose,
    )
}

/// Install the global subscriber with custom configuration.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
    verbose_override: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = config.filter(verbose_override)?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(ObservabilityConfig::for_verbosity(true).log_level, "debug");
        assert_eq!(ObservabilityConfig::default().log_level, "info");
    }

    #[test]
    fn test_json_logs_keep_level() {
        let config = ObservabilityConfig::for_verbosity(true).with_json_logs(true);
        assert!(config.json_logs);
        assert_eq!(config.log_level, "debug");
        assert!(!ObservabilityConfig::default().json_logs);
    }

    #[test]
    fn test_verbose_filter_ignores_environment() {
        let filter = ObservabilityConfig::for_verbosity(true).filter(true).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }
}
