use crate::parser::RegexError;
use thiserror::Error;

/// Batch-level error returned to the HTTP collaborator.
///
/// Any variant means no records from the batch are emitted.
#[derive(Error, Debug)]
pub enum DrainError {
    #[error("Request content is required")]
    MissingContent,

    #[error("Could not parse event: {content}")]
    LineParse {
        /// The first line that did not match.
        line: String,
        /// Whole request body, kept for diagnostics.
        content: String,
    },

    #[error("Invalid parse expression: {0}")]
    Pattern(#[from] RegexError),
}

impl DrainError {
    /// Whether the error is caused by the request rather than by setup.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DrainError::MissingContent | DrainError::LineParse { .. }
        )
    }
}
