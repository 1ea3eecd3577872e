use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors crossing the collaborator boundary
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The engine rejected the template or candidate
    #[error(transparent)]
    Engine(#[from] gapfill_engine::EngineError),

    /// A transport implementation failed to reach or parse the judge
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid polling configuration
    #[error("invalid poll config: {0}")]
    InvalidConfig(String),

    /// The watch task ended without an outcome
    #[error("watch task failed: {0}")]
    TaskFailed(String),
}

impl ProtocolError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
