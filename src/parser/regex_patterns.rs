// Logplex syslog expression management
use super::regex_error::RegexError;
use regex::Regex;
use std::sync::OnceLock;

/// Logplex frame: `<len> <PRI>VERSION TIME DRAIN IDENT [PID] - MESSAGE`.
pub const SYSLOG_HTTP_PATTERN: &str = r"^([0-9]+)\s+<(?P<pri>[0-9]+)>[0-9]* (?P<time>[^ ]*) (?P<drain_id>[^ ]*) (?P<ident>[a-zA-Z0-9_/.\-]*) (?P<pid>[a-zA-Z0-9.]+)? *- *(?P<message>.*)$";

/// Named groups an expression must define to be usable.
pub const REQUIRED_GROUPS: [&str; 2] = ["pri", "message"];

/// Named groups that map onto `Record` fields; any other group is passthrough.
pub const KNOWN_GROUPS: [&str; 6] = ["pri", "time", "drain_id", "ident", "pid", "message"];

/// Keys the assembler derives itself; a group with one of these names is dropped.
pub const RESERVED_GROUPS: [&str; 2] = ["facility", "priority"];

/// Whether a named group belongs in `ParsedFields::extra`.
pub fn is_passthrough_group(name: &str) -> bool {
    !KNOWN_GROUPS.contains(&name) && !RESERVED_GROUPS.contains(&name)
}

static DEFAULT_REGEX: OnceLock<Result<Regex, RegexError>> = OnceLock::new();

/// The default expression, compiled once per process.
pub fn default_regex() -> Result<&'static Regex, RegexError> {
    match DEFAULT_REGEX.get_or_init(|| compile(SYSLOG_HTTP_PATTERN)) {
        Ok(regex) => Ok(regex),
        Err(e) => Err(e.clone()),
    }
}

/// Compile an expression and check it defines the required named groups.
pub fn compile(pattern: &str) -> Result<Regex, RegexError> {
    let regex = Regex::new(pattern).map_err(|source| RegexError::CompilationFailed {
        pattern: pattern.to_string(),
        source,
    })?;

    for group in REQUIRED_GROUPS {
        if !regex.capture_names().flatten().any(|name| name == group) {
            return Err(RegexError::MissingCaptureGroup {
                pattern: pattern.to_string(),
                group,
            });
        }
    }

    Ok(regex)
}
