//! gpudiag-engine: contracts with the diagnostic engine
//!
//! This crate describes everything the diagnostic core needs to know about
//! the engine without depending on a live connection.
//!
//! ## Key Components
//!
//! - `DiagSession`: the single capability used by the core (run a level
//!   against a group, fill a response buffer)
//! - `RawDiagResponse`: fixed-capacity, version-tagged response buffer
//! - `codes`: native levels, result status codes, software test ids
//! - `ReplaySession`: serves a captured response or scripted failure

pub mod codes;
mod error;
pub mod replay;
pub mod response;
pub mod session;

pub use codes::{EntityId, GroupHandle, NativeDiagLevel};
pub use error::{EngineError, EngineStatus};
pub use replay::{RecordedRun, ReplayLoadError, ReplayOutcome, ReplaySession};
pub use response::{
    make_version, RawDiagError, RawDiagInfo, RawDiagResponse, RawDiagResult,
    DIAG_RESPONSE_VERSION, DIAG_RESULT_STRING_SIZE,
};
pub use session::{DiagSession, EngineResult};
