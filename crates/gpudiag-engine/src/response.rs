//! Raw diagnostic response buffer.
//!
//! Models the engine's fixed-capacity response structure: three
//! independently indexed arrays (results, errors, info) tagged only by
//! entity id. The engine fills the buffer through the `push_*` writers;
//! everything else reads it through the slice accessors.
//!
//! The buffer carries a version tag derived from the logical size of the
//! fixed layout. A session refuses a buffer whose tag it does not know.

use serde::{Deserialize, Serialize};

use crate::codes::EntityId;
use crate::error::EngineStatus;

/// Layout revision of the response structure.
pub const DIAG_RESPONSE_REVISION: u32 = 11;

/// Maximum number of result entries in one response.
pub const DIAG_RESULTS_MAX: usize = 4096;

/// Maximum number of error entries in one response.
pub const DIAG_ERRORS_MAX: usize = 128;

/// Maximum number of info entries in one response.
pub const DIAG_INFO_MAX: usize = 128;

/// Size of a message slot, including the terminating NUL.
pub const DIAG_RESULT_STRING_SIZE: usize = 1024;

const ENTITY_SIZE: usize = 8; // group id + entity id
const RESULT_ENTRY_SIZE: usize = ENTITY_SIZE + 4 + 4;
const ERROR_ENTRY_SIZE: usize = ENTITY_SIZE + 4 + DIAG_RESULT_STRING_SIZE;
const INFO_ENTRY_SIZE: usize = ENTITY_SIZE + DIAG_RESULT_STRING_SIZE;
const HEADER_SIZE: usize = 4 * 4; // version + three counts

/// Logical byte size of the fixed response layout.
pub const DIAG_RESPONSE_LOGICAL_SIZE: usize = HEADER_SIZE
    + DIAG_RESULTS_MAX * RESULT_ENTRY_SIZE
    + DIAG_ERRORS_MAX * ERROR_ENTRY_SIZE
    + DIAG_INFO_MAX * INFO_ENTRY_SIZE;

/// Version tag a session expects on every response buffer.
pub const DIAG_RESPONSE_VERSION: u32 =
    make_version(DIAG_RESPONSE_LOGICAL_SIZE, DIAG_RESPONSE_REVISION);

/// Pack a structure size and layout revision into a version tag.
pub const fn make_version(size: usize, revision: u32) -> u32 {
    (size as u32) | (revision << 24)
}

/// One executed (entity, test) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDiagResult {
    pub entity_id: EntityId,
    pub test_id: u32,
    /// Native result status code.
    pub result: i32,
}

/// Error record for an entity. Not keyed by test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDiagError {
    pub entity_id: EntityId,
    pub code: u32,
    pub msg: String,
}

/// Informational message for an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDiagInfo {
    pub entity_id: EntityId,
    pub msg: String,
}

/// Response buffer for a single diagnostic run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDiagResponse {
    version: u32,
    #[serde(default)]
    results: Vec<RawDiagResult>,
    #[serde(default)]
    errors: Vec<RawDiagError>,
    #[serde(default)]
    info: Vec<RawDiagInfo>,
}

impl Default for RawDiagResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl RawDiagResponse {
    /// Empty buffer tagged with [`DIAG_RESPONSE_VERSION`].
    pub fn new() -> Self {
        Self {
            version: DIAG_RESPONSE_VERSION,
            results: Vec::new(),
            errors: Vec::new(),
            info: Vec::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn results(&self) -> &[RawDiagResult] {
        &self.results
    }

    pub fn errors(&self) -> &[RawDiagError] {
        &self.errors
    }

    pub fn info(&self) -> &[RawDiagInfo] {
        &self.info
    }

    /// Append a result entry. Fails with `INSUFFICIENT_SIZE` when full.
    pub fn push_result(&mut self, entry: RawDiagResult) -> Result<(), EngineStatus> {
        if self.results.len() >= DIAG_RESULTS_MAX {
            return Err(EngineStatus::INSUFFICIENT_SIZE);
        }
        self.results.push(entry);
        Ok(())
    }

    /// Append an error entry, truncating the message to the slot size.
    pub fn push_error(
        &mut self,
        entity_id: EntityId,
        code: u32,
        msg: &str,
    ) -> Result<(), EngineStatus> {
        if self.errors.len() >= DIAG_ERRORS_MAX {
            return Err(EngineStatus::INSUFFICIENT_SIZE);
        }
        self.errors.push(RawDiagError {
            entity_id,
            code,
            msg: fit_message(msg).to_string(),
        });
        Ok(())
    }

    /// Append an info entry, truncating the message to the slot size.
    pub fn push_info(&mut self, entity_id: EntityId, msg: &str) -> Result<(), EngineStatus> {
        if self.info.len() >= DIAG_INFO_MAX {
            return Err(EngineStatus::INSUFFICIENT_SIZE);
        }
        self.info.push(RawDiagInfo {
            entity_id,
            msg: fit_message(msg).to_string(),
        });
        Ok(())
    }

    /// Copy every entry of `source` into this buffer, keeping this buffer's
    /// version tag.
    pub fn fill_from(&mut self, source: &RawDiagResponse) -> Result<(), EngineStatus> {
        for entry in &source.results {
            self.push_result(*entry)?;
        }
        for entry in &source.errors {
            self.push_error(entry.entity_id, entry.code, &entry.msg)?;
        }
        for entry in &source.info {
            self.push_info(entry.entity_id, &entry.msg)?;
        }
        Ok(())
    }
}

/// Longest prefix of `msg` that fits a message slot (leaving room for the
/// terminator) without splitting a character.
fn fit_message(msg: &str) -> &str {
    let limit = DIAG_RESULT_STRING_SIZE - 1;
    if msg.len() <= limit {
        return msg;
    }
    let mut end = limit;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_is_empty_and_versioned() {
        let response = RawDiagResponse::new();
        assert_eq!(response.version(), DIAG_RESPONSE_VERSION);
        assert!(response.results().is_empty());
        assert!(response.errors().is_empty());
        assert!(response.info().is_empty());
    }

    #[test]
    fn test_version_encodes_size_and_revision() {
        assert_eq!(DIAG_RESPONSE_VERSION >> 24, DIAG_RESPONSE_REVISION);
        assert_eq!(
            (DIAG_RESPONSE_VERSION & 0x00ff_ffff) as usize,
            DIAG_RESPONSE_LOGICAL_SIZE
        );
    }

    #[test]
    fn test_make_version() {
        assert_eq!(make_version(0x10, 1), 0x0100_0010);
    }

    #[test]
    fn test_push_result_capacity() {
        let mut response = RawDiagResponse::new();
        let entry = RawDiagResult {
            entity_id: EntityId(0),
            test_id: 0,
            result: 0,
        };
        for _ in 0..DIAG_RESULTS_MAX {
            response.push_result(entry).unwrap();
        }
        assert_eq!(
            response.push_result(entry),
            Err(EngineStatus::INSUFFICIENT_SIZE)
        );
        assert_eq!(response.results().len(), DIAG_RESULTS_MAX);
    }

    #[test]
    fn test_push_error_capacity() {
        let mut response = RawDiagResponse::new();
        for i in 0..DIAG_ERRORS_MAX {
            response.push_error(EntityId(i as u32), 1, "e").unwrap();
        }
        assert_eq!(
            response.push_error(EntityId(0), 1, "overflow"),
            Err(EngineStatus::INSUFFICIENT_SIZE)
        );
    }

    #[test]
    fn test_long_message_is_truncated() {
        let mut response = RawDiagResponse::new();
        let long = "x".repeat(DIAG_RESULT_STRING_SIZE * 2);
        response.push_info(EntityId(1), &long).unwrap();
        assert_eq!(response.info()[0].msg.len(), DIAG_RESULT_STRING_SIZE - 1);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 'é' is two bytes; 1023 is odd, so the cut must back off one byte.
        let long = "é".repeat(DIAG_RESULT_STRING_SIZE);
        let fitted = fit_message(&long);
        assert!(fitted.len() < DIAG_RESULT_STRING_SIZE);
        assert_eq!(fitted.len() % 2, 0);
    }

    #[test]
    fn test_fill_from_keeps_order_and_version() {
        let mut source = RawDiagResponse::new();
        source
            .push_result(RawDiagResult {
                entity_id: EntityId(3),
                test_id: 4,
                result: 3,
            })
            .unwrap();
        source.push_error(EntityId(3), 12, "denied").unwrap();
        source.push_info(EntityId(3), "checked /dev").unwrap();

        let mut target = RawDiagResponse::new();
        target.fill_from(&source).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn test_deserialize_missing_arrays_default_to_empty() {
        let json = format!("{{\"version\": {}}}", DIAG_RESPONSE_VERSION);
        let response: RawDiagResponse = serde_json::from_str(&json).expect("deserialize");
        assert!(response.results().is_empty());
    }
}
