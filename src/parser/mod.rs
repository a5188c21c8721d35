pub mod pri;
pub mod regex_error;
pub mod regex_patterns;
pub mod syslog_http;

pub use pri::{DecodedPri, decode, decode_field, lenient_int};
pub use regex_error::RegexError;
pub use regex_patterns::SYSLOG_HTTP_PATTERN;
pub use syslog_http::{Lines, ParseError, ParsedFields, ParsedLine, SyslogHttpParser};
