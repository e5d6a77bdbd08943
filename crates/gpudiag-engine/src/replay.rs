//! Replay session: serves a captured engine response (or a scripted failure)
//! through the [`DiagSession`] contract.
//!
//! Used by the CLI to decode responses captured on a real host, and by tests
//! as a stub engine. Every call is recorded so callers can assert how often
//! the engine was contacted.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::codes::{GroupHandle, NativeDiagLevel};
use crate::error::{EngineError, EngineStatus};
use crate::response::{RawDiagResponse, DIAG_RESPONSE_VERSION};
use crate::session::{DiagSession, EngineResult};

/// Errors loading a captured response.
#[derive(Error, Debug)]
pub enum ReplayLoadError {
    #[error("failed to read captured response: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse captured response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("captured response has version {found:#x}, expected {expected:#x}")]
    Version { found: u32, expected: u32 },
}

/// What the replayed engine does on every call.
#[derive(Debug, Clone)]
pub enum ReplayOutcome {
    Respond(RawDiagResponse),
    Fail(EngineError),
}

/// One recorded `run_diagnostic` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedRun {
    pub group: GroupHandle,
    pub level: NativeDiagLevel,
}

/// Session that replays a fixed outcome.
#[derive(Debug)]
pub struct ReplaySession {
    outcome: ReplayOutcome,
    calls: Mutex<Vec<RecordedRun>>,
}

impl ReplaySession {
    /// Session that answers every run with a copy of `response`.
    pub fn responding(response: RawDiagResponse) -> Self {
        Self {
            outcome: ReplayOutcome::Respond(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Session whose every run fails with `error`.
    pub fn failing(error: EngineError) -> Self {
        Self {
            outcome: ReplayOutcome::Fail(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Load a captured response from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ReplayLoadError> {
        let response: RawDiagResponse = serde_json::from_str(json)?;
        if response.version() != DIAG_RESPONSE_VERSION {
            return Err(ReplayLoadError::Version {
                found: response.version(),
                expected: DIAG_RESPONSE_VERSION,
            });
        }
        Ok(Self::responding(response))
    }

    /// Load a captured response from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ReplayLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Every invocation seen so far, in call order.
    pub fn calls(&self) -> Vec<RecordedRun> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl DiagSession for ReplaySession {
    async fn run_diagnostic(
        &self,
        group: GroupHandle,
        level: NativeDiagLevel,
        response: &mut RawDiagResponse,
    ) -> EngineResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRun { group, level });

        debug!(group = %group, level = ?level, "replaying diagnostic run");

        if response.version() != DIAG_RESPONSE_VERSION {
            return Err(EngineError::from_status(EngineStatus::VER_MISMATCH));
        }
        if !level.is_valid() {
            return Err(EngineError::from_status(EngineStatus::BADPARAM));
        }

        match &self.outcome {
            ReplayOutcome::Fail(error) => Err(error.clone()),
            ReplayOutcome::Respond(captured) => {
                // Fill a scratch buffer so the caller's buffer stays untouched
                // if the captured data overflows it.
                let mut scratch = RawDiagResponse::new();
                scratch.fill_from(captured).map_err(EngineError::from_status)?;
                *response = scratch;
                Ok(())
            }
        }
    }
}
