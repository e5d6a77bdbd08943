//! Engine status codes and the error type sessions return.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Return code of an engine call. Zero is success, negative values are
/// failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EngineStatus(pub i32);

impl EngineStatus {
    pub const OK: Self = Self(0);
    pub const BADPARAM: Self = Self(-1);
    pub const GENERIC_ERROR: Self = Self(-3);
    pub const MEMORY: Self = Self(-4);
    pub const NOT_CONFIGURED: Self = Self(-5);
    pub const NOT_SUPPORTED: Self = Self(-6);
    pub const INIT_ERROR: Self = Self(-7);
    pub const NVML_ERROR: Self = Self(-8);
    pub const PENDING: Self = Self(-9);
    pub const UNINITIALIZED: Self = Self(-10);
    pub const TIMEOUT: Self = Self(-11);
    pub const VER_MISMATCH: Self = Self(-12);
    pub const UNKNOWN_FIELD: Self = Self(-13);
    pub const NO_DATA: Self = Self(-14);
    pub const STALE_DATA: Self = Self(-15);
    pub const NOT_WATCHED: Self = Self(-16);
    pub const NO_PERMISSION: Self = Self(-17);
    pub const GPU_IS_LOST: Self = Self(-18);
    pub const RESET_REQUIRED: Self = Self(-19);
    pub const FUNCTION_NOT_FOUND: Self = Self(-20);
    pub const CONNECTION_NOT_VALID: Self = Self(-21);
    pub const GPU_NOT_SUPPORTED: Self = Self(-22);
    pub const GROUP_INCOMPATIBLE: Self = Self(-23);
    pub const MAX_LIMIT: Self = Self(-24);
    pub const LIBRARY_NOT_FOUND: Self = Self(-25);
    pub const DUPLICATE_KEY: Self = Self(-26);
    pub const REQUIRES_ROOT: Self = Self(-29);
    pub const DIAG_ERROR: Self = Self(-30);
    pub const INSUFFICIENT_SIZE: Self = Self(-31);

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    /// Fixed human-readable description of the status.
    pub fn message(&self) -> &'static str {
        match *self {
            Self::OK => "Success",
            Self::BADPARAM => "Bad parameter passed to function",
            Self::GENERIC_ERROR => "Generic unspecified error",
            Self::MEMORY => "Out of memory error",
            Self::NOT_CONFIGURED => "Setting not configured",
            Self::NOT_SUPPORTED => "Feature not supported",
            Self::INIT_ERROR => "Engine initialization error",
            Self::NVML_ERROR => "NVML error",
            Self::PENDING => "Object is in a pending state",
            Self::UNINITIALIZED => "Object is in an undefined state",
            Self::TIMEOUT => "Timeout",
            Self::VER_MISMATCH => "API version mismatch",
            Self::UNKNOWN_FIELD => "Unknown field identifier",
            Self::NO_DATA => "No data is available",
            Self::STALE_DATA => "Data is considered stale",
            Self::NOT_WATCHED => "Field is not being updated",
            Self::NO_PERMISSION => "Not permissioned",
            Self::GPU_IS_LOST => "GPU is no longer reachable",
            Self::RESET_REQUIRED => "GPU requires a reset",
            Self::FUNCTION_NOT_FOUND => "The requested function was not found",
            Self::CONNECTION_NOT_VALID => "Host engine connection invalid/disconnected",
            Self::GPU_NOT_SUPPORTED => "This GPU is not supported",
            Self::GROUP_INCOMPATIBLE => "The GPUs of this group are incompatible with each other",
            Self::MAX_LIMIT => "Max limit reached for the object",
            Self::LIBRARY_NOT_FOUND => "Engine library could not be found",
            Self::DUPLICATE_KEY => "Duplicate key passed to function",
            Self::REQUIRES_ROOT => "This operation requires root access",
            Self::DIAG_ERROR => "Diagnostic engine returned an error",
            Self::INSUFFICIENT_SIZE => "Input size inadequate",
            _ => "Unknown error code",
        }
    }
}

impl std::fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure reported by a diagnostic session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct EngineError {
    /// Native status code returned by the engine.
    pub status: EngineStatus,

    /// The engine's own description of the failure.
    pub message: String,
}

impl EngineError {
    /// Build an error whose message comes from the status table.
    pub fn from_status(status: EngineStatus) -> Self {
        Self {
            status,
            message: status.message().to_string(),
        }
    }

    /// Build an error with an engine-supplied message.
    pub fn new(status: EngineStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<EngineStatus> for EngineError {
    fn from(status: EngineStatus) -> Self {
        EngineError::from_status(status)
    }
}
