//! Tracing/logging initialization.
//!
//! Configured through environment variables:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `CART_LOG_FORMAT`: `json` (default), `pretty` or `compact`

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "CART_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0:?} (expected json, pretty or compact)")]
pub struct ParseLogFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ParseLogFormatError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when `CART_LOG_FORMAT` held something unusable; reported once the
    /// subscriber is up.
    pub format_error: Option<ParseLogFormatError>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            format_error: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(FILTER_ENV).ok().as_deref(),
            std::env::var(FORMAT_ENV).ok().as_deref(),
        )
    }

    /// Build from raw variable values (`None` = unset).
    pub fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string();

        let (format, format_error) = match format.map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        };

        Self {
            filter,
            format,
            format_error,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize tracing/logging for the process with an explicit configuration.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &ObservabilityConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        if let Some(err) = &config.format_error {
            ::tracing::warn!("{err}; falling back to json");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ObservabilityConfig::from_vars(None, None);
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_vars(Some("cart=debug"), Some(" Pretty "));
        assert_eq!(config.filter, "cart=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.format_error.is_none());
    }

    #[test]
    fn blank_filter_falls_back() {
        let config = ObservabilityConfig::from_vars(Some("  "), Some("compact"));
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn unknown_format_is_kept_as_error() {
        let config = ObservabilityConfig::from_vars(None, Some("xml"));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(
            config.format_error,
            Some(ParseLogFormatError("xml".to_string()))
        );
    }

    #[test]
    fn init_is_idempotent() {
        let config = ObservabilityConfig::from_vars(Some("not a [valid filter"), None);
        init_with(&config);
        init_with(&config);
    }
}
