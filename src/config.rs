use crate::parser::{RegexError, regex_patterns};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DRAIN_IDS_ENV: &str = "LOGPLEX_DRAIN_IDS";
pub const EXPRESSION_ENV: &str = "LOGPLEX_SYSLOG_EXPRESSION";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Environment error: {0}")]
    EnvError(String),
    #[error("Invalid parse expression: {0}")]
    Pattern(#[from] RegexError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Receiver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Accepted drain tokens; empty accepts every drain.
    pub drain_ids: Vec<String>,
    /// Override for the Logplex parse expression.
    pub expression: Option<String>,
    pub log_level: LogLevel,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drain_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::InvalidConfig(
                "Drain ids cannot be empty".into(),
            ));
        }
        if let Some(pattern) = self.expression.as_deref() {
            regex_patterns::compile(pattern)?;
        }
        Ok(())
    }

    /// Build settings from a key lookup keyed by the `LOGPLEX_*` / `LOG_LEVEL` names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(DRAIN_IDS_ENV) {
            settings.drain_ids = parse_drain_ids(&raw);
        }

        settings.expression = lookup(EXPRESSION_ENV).filter(|e| !e.trim().is_empty());

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            settings.log_level = LogLevel::from_str(&level, true).map_err(|_| {
                ConfigError::EnvError(format!("Invalid {LOG_LEVEL_ENV}: {level}"))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Split a comma separated drain id list, ignoring blank entries.
pub fn parse_drain_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_drain_ids() {
        assert_eq!(parse_drain_ids("d.1, d.2,,d.3 "), vec!["d.1", "d.2", "d.3"]);
        assert!(parse_drain_ids("").is_empty());
        assert!(parse_drain_ids(" , ").is_empty());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let settings = Settings::from_lookup(lookup_from(&[
            (DRAIN_IDS_ENV, "d.1,d.2"),
            (EXPRESSION_ENV, r"^<(?P<pri>\d+)>(?P<message>.*)$"),
            (LOG_LEVEL_ENV, "DEBUG"),
        ]))
        .unwrap();

        assert_eq!(settings.drain_ids, vec!["d.1", "d.2"]);
        assert!(settings.expression.is_some());
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_from_lookup_rejects_invalid_log_level() {
        let result = Settings::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "loud")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid LOG_LEVEL"));
    }

    #[test]
    fn test_from_lookup_rejects_expression_without_groups() {
        let result = Settings::from_lookup(lookup_from(&[(EXPRESSION_ENV, r"^.*$")]));
        assert!(matches!(result, Err(ConfigError::Pattern(_))));
    }

    #[test]
    fn test_validate_rejects_blank_drain_id() {
        let settings = Settings {
            drain_ids: vec!["d.1".into(), "  ".into()],
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Drain ids cannot be empty"));
    }

    #[test]
    fn test_log_level_into_tracing_level() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
    }
}
