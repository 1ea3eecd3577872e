use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while segmenting a template or reconciling a
/// candidate against it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The template text was empty
    #[error("template is empty")]
    EmptyTemplate,

    /// The candidate is not a formatting-only variant of the template
    #[error("candidate does not match template: {0}")]
    TemplateMismatch(String),

    /// A blank list of the wrong length was supplied for assembly
    #[error("expected {expected} blanks, got {actual}")]
    BlankCountMismatch { expected: usize, actual: usize },
}

impl EngineError {
    /// Create a template mismatch error
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::TemplateMismatch(msg.into())
    }
}
