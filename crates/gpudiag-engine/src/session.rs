//! Session contract for the diagnostic engine.
//!
//! A session is an initialized connection to the engine. The diagnostic core
//! only needs one capability from it: run a diagnostic level against a group
//! and fill a response buffer. Connection setup and group management belong
//! to whoever constructs the session.

use async_trait::async_trait;

use crate::codes::{GroupHandle, NativeDiagLevel};
use crate::error::EngineError;
use crate::response::RawDiagResponse;

/// Result type for engine calls
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Capability to run diagnostics on the engine.
///
/// Guarantees expected from implementations:
/// - `response` is only written during the call and left untouched on error.
/// - A buffer whose version tag is unknown is rejected with `VER_MISMATCH`.
/// - The call returns only once the requested level has completed.
#[async_trait]
pub trait DiagSession: Send + Sync {
    /// Run diagnostic `level` against `group`, populating `response`.
    async fn run_diagnostic(
        &self,
        group: GroupHandle,
        level: NativeDiagLevel,
        response: &mut RawDiagResponse,
    ) -> EngineResult<()>;
}
