use super::regex_error::RegexError;
use super::regex_patterns;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line does not match the syslog expression: {line:?}")]
    NoMatch { line: String },
}

/// Raw fields captured from one Logplex line. Nothing is interpreted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub pri: Option<String>,
    pub time: Option<String>,
    pub drain_id: Option<String>,
    pub ident: Option<String>,
    pub pid: Option<String>,
    pub message: Option<String>,
    /// Named groups a custom expression adds beyond the fields above.
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Unix seconds of the message, or of the parse when `time` is unusable.
    pub event_time: i64,
    pub fields: ParsedFields,
    pub raw: String,
}

/// Parser for Heroku Logplex syslog-over-HTTP bodies.
#[derive(Debug, Clone)]
pub struct SyslogHttpParser {
    regex: Regex,
    clock: fn() -> DateTime<Utc>,
}

impl SyslogHttpParser {
    pub fn new() -> Result<Self, RegexError> {
        Ok(Self {
            regex: regex_patterns::default_regex()?.clone(),
            clock: Utc::now,
        })
    }

    /// Use a caller-supplied expression instead of the Logplex default.
    pub fn with_expression(pattern: &str) -> Result<Self, RegexError> {
        Ok(Self {
            regex: regex_patterns::compile(pattern)?,
            clock: Utc::now,
        })
    }

    /// Replace the wall clock used for missing or unparsable timestamps.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn parse_line(&self, line: &str) -> Result<ParsedLine, ParseError> {
        let captures = self
            .regex
            .captures(line)
            .ok_or_else(|| ParseError::NoMatch {
                line: line.to_string(),
            })?;

        let field = |name: &str| captures.name(name).map(|m| m.as_str().to_string());

        let extra = self
            .regex
            .capture_names()
            .flatten()
            .filter(|name| regex_patterns::is_passthrough_group(name))
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();

        let fields = ParsedFields {
            pri: field("pri"),
            time: field("time"),
            drain_id: field("drain_id"),
            ident: field("ident"),
            pid: field("pid"),
            message: field("message"),
            extra,
        };

        let event_time = fields
            .time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map_or_else(|| self.now().timestamp(), |dt| dt.timestamp());

        Ok(ParsedLine {
            event_time,
            fields,
            raw: line.to_string(),
        })
    }

    /// Lazily parse every non-empty line of a request body, in order.
    pub fn parse<'a>(&'a self, text: &'a str) -> Lines<'a> {
        Lines {
            parser: self,
            inner: text.split('\n'),
        }
    }
}

/// Iterator returned by [`SyslogHttpParser::parse`].
pub struct Lines<'a> {
    parser: &'a SyslogHttpParser,
    inner: std::str::Split<'a, char>,
}

impl Iterator for Lines<'_> {
    type Item = Result<ParsedLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.inner.next()?;
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            return Some(self.parser.parse_line(line));
        }
    }
}
