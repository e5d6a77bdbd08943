//! Error taxonomy for diagnostic runs.

use gpudiag_engine::EngineError;

/// Errors produced while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Diagnostic run errors.
///
/// Only the request itself can fail. Decoding a response never does.
#[derive(Debug, thiserror::Error)]
pub enum DiagError {
    /// The requested level has no native counterpart. Raised before the
    /// engine is contacted.
    #[error("invalid diagnostic level: {0}")]
    InvalidLevel(i32),

    #[error("unrecognized diagnostic level: {0}")]
    UnparsableLevel(String),

    /// The engine reported a non-success status for the run.
    #[error("diagnostic run failed: {message} (code {code})")]
    Engine { code: i32, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<EngineError> for DiagError {
    fn from(err: EngineError) -> Self {
        DiagError::Engine {
            code: err.status.code(),
            message: err.message,
        }
    }
}

impl DiagError {
    /// Native engine code, when the engine produced this error.
    pub fn engine_code(&self) -> Option<i32> {
        match self {
            DiagError::Engine { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for diagnostic operations.
pub type Result<T> = std::result::Result<T, DiagError>;
