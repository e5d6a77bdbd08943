//! gpudiag core
//!
//! Runs an accelerator health diagnostic against a device group and turns
//! the engine's flat, entity-tagged response into per-test results.
//!
//! The session is always passed in explicitly; nothing here holds global
//! engine state, so several sessions can be used side by side.

pub mod builder;
pub mod config;
pub mod decoder;
pub mod error;
pub mod labels;
pub mod level;
pub mod obs;
pub mod orchestrator;
pub mod result;
pub mod telemetry;

pub use builder::build_result;
pub use config::DiagConfig;
pub use decoder::{find_error, find_info, ResponseIndex};
pub use error::{ConfigError, DiagError, Result};
pub use labels::{level_for, result_status_label, test_label};
pub use level::DiagLevel;
pub use orchestrator::{decode_response, run_diag};
pub use result::{DiagResult, DiagResults};

pub use gpudiag_engine::{DiagSession, GroupHandle};
