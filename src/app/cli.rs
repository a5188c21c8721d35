use crate::config::{
    ConfigError, DRAIN_IDS_ENV, EXPRESSION_ENV, LOG_LEVEL_ENV, LogLevel, Settings,
};
use crate::drain::DrainMetadata;
use clap::{Parser, ValueEnum};

/// Decode a Heroku Logplex drain body from stdin into NDJSON records.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Drain token of the request (the Logplex-Drain-Token header)
    #[arg(long, env = "LOGPLEX_DRAIN_TOKEN")]
    pub drain_token: Option<String>,

    /// Frame id of the request (the Logplex-Frame-Id header)
    #[arg(long, env = "LOGPLEX_FRAME_ID")]
    pub frame_id: Option<String>,

    /// Comma separated list of accepted drain ids
    #[arg(long, env = "LOGPLEX_DRAIN_IDS", value_delimiter = ',')]
    pub drain_ids: Vec<String>,

    /// Override for the syslog parse expression
    #[arg(long, env = "LOGPLEX_SYSLOG_EXPRESSION")]
    pub expression: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Resolve flags (or their env fallbacks) through [`Settings::from_lookup`].
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let drain_ids = self.drain_ids.join(",");
        let log_level = self
            .log_level
            .to_possible_value()
            .map(|value| value.get_name().to_string());

        Settings::from_lookup(|key| match key {
            DRAIN_IDS_ENV => Some(drain_ids.clone()),
            EXPRESSION_ENV => self.expression.clone(),
            LOG_LEVEL_ENV => log_level.clone(),
            _ => None,
        })
    }

    pub fn metadata(&self) -> DrainMetadata {
        DrainMetadata {
            drain_token: self.drain_token.clone(),
            frame_id: self.frame_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "logplex-drain",
            "--drain-token",
            "d.123",
            "--frame-id",
            "F1",
            "--drain-ids",
            "d.123,d.456",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.metadata(), DrainMetadata::new("d.123").with_frame_id("F1"));
        let settings = cli.settings().unwrap();
        assert_eq!(settings.drain_ids, vec!["d.123", "d.456"]);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.expression, None);
    }

    #[test]
    fn test_settings_follow_lookup_rules() {
        let cli = Cli::try_parse_from([
            "logplex-drain",
            "--drain-ids",
            " , d.1,",
            "--expression",
            "  ",
            "--log-level",
            "warn",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.drain_ids, vec!["d.1"]);
        assert_eq!(settings.expression, None);
        assert_eq!(settings.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_expression_fails_settings() {
        let cli = Cli::try_parse_from(["logplex-drain", "--expression", "^(?P<pri>\\d+)$"]).unwrap();
        assert!(matches!(cli.settings(), Err(ConfigError::Pattern(_))));
    }

    #[test]
    fn test_invalid_log_level_rejected_by_clap() {
        assert!(Cli::try_parse_from(["logplex-drain", "--log-level", "loud"]).is_err());
    }
}
