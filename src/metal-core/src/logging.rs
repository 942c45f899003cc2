use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Verbosity for the embedder-facing logging bootstrap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to parse log level {level}: {source}")]
    ParseLevel {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInstall(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs a stdout `tracing` subscriber filtered at `level`.
///
/// This is an opt-in bootstrap for embedders; the adapter crates emit
/// `tracing` events but never install a subscriber themselves. Fails if a
/// global subscriber is already set.
pub fn init_logging(level: LogLevel) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_new(level.as_filter_directive()).map_err(|source| LoggingError::ParseLevel {
            level: level.as_filter_directive().to_string(),
            source,
        })?;

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(LoggingError::SubscriberInstall)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_directive_is_lowercase() {
        assert_eq!(LogLevel::Info.as_filter_directive(), "info");
        assert_eq!(LogLevel::Trace.as_filter_directive(), "trace");
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
