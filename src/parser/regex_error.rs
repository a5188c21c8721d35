// Regex error handling for the Logplex parse expression
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RegexError {
    #[error("Regex compilation failed for pattern '{pattern}': {source}")]
    CompilationFailed {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Regex pattern '{pattern}' is missing named group '{group}'")]
    MissingCaptureGroup {
        pattern: String,
        group: &'static str,
    },
}
