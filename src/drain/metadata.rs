use std::collections::HashMap;
use std::hash::BuildHasher;

/// Rack-style parameter carrying the Logplex drain token.
pub const DRAIN_TOKEN_PARAM: &str = "HTTP_LOGPLEX_DRAIN_TOKEN";
pub const DRAIN_TOKEN_HEADER: &str = "Logplex-Drain-Token";

pub const FRAME_ID_PARAM: &str = "HTTP_LOGPLEX_FRAME_ID";
pub const FRAME_ID_HEADER: &str = "Logplex-Frame-Id";

/// Per-request delivery metadata supplied by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainMetadata {
    /// Authoritative drain id for every record in the request.
    pub drain_token: Option<String>,
    /// Logplex frame id, used for log correlation only.
    pub frame_id: Option<String>,
}

impl DrainMetadata {
    pub fn new(drain_token: impl Into<String>) -> Self {
        Self {
            drain_token: Some(drain_token.into()),
            frame_id: None,
        }
    }

    pub fn with_frame_id(mut self, frame_id: impl Into<String>) -> Self {
        self.frame_id = Some(frame_id.into());
        self
    }

    /// Extract metadata from request parameters or raw headers.
    ///
    /// The CGI-style key wins; the header spelling is matched case-insensitively.
    pub fn from_headers<S: BuildHasher>(headers: &HashMap<String, String, S>) -> Self {
        Self {
            drain_token: lookup(headers, DRAIN_TOKEN_PARAM, DRAIN_TOKEN_HEADER),
            frame_id: lookup(headers, FRAME_ID_PARAM, FRAME_ID_HEADER),
        }
    }
}

fn lookup<S: BuildHasher>(
    headers: &HashMap<String, String, S>,
    param: &str,
    header: &str,
) -> Option<String> {
    headers.get(param).cloned().or_else(|| {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(header))
            .map(|(_, value)| value.clone())
    })
}
