//! Native code tables shared with the diagnostic engine.
//!
//! These are the values the engine writes into a response buffer and
//! expects in a run request. They are plain integers on the wire; the core
//! crate turns them into stable labels.

use serde::{Deserialize, Serialize};

/// Diagnostic level understood by the engine.
///
/// `Invalid` is the sentinel produced when a requested depth cannot be
/// resolved. A well-behaved caller never sends it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum NativeDiagLevel {
    Invalid = 0,
    Short = 10,
    Medium = 20,
    Long = 30,
    ExtraLong = 40,
}

impl NativeDiagLevel {
    /// Raw value as sent to the engine.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn is_valid(self) -> bool {
        self != NativeDiagLevel::Invalid
    }
}

/// Per-test result status codes (`results[].result`).
pub mod result_status {
    pub const PASS: i32 = 0;
    pub const SKIP: i32 = 1;
    pub const WARN: i32 = 2;
    pub const FAIL: i32 = 3;
    pub const NOT_RUN: i32 = 4;
}

/// Software-prerequisite test identifiers (`results[].test_id`).
pub mod sw_test {
    /// Drivers on the denylist (e.g. nouveau) are loaded.
    pub const DENYLIST: u32 = 0;
    pub const NVML_LIBRARY: u32 = 1;
    pub const CUDA_MAIN_LIBRARY: u32 = 2;
    pub const CUDA_RUNTIME_LIBRARY: u32 = 3;
    pub const PERMISSIONS: u32 = 4;
    pub const PERSISTENCE_MODE: u32 = 5;
    pub const ENVIRONMENT: u32 = 6;
    pub const PAGE_RETIREMENT: u32 = 7;
    pub const GRAPHICS_PROCESSES: u32 = 8;
    pub const INFOROM: u32 = 9;

    /// Every software test id the engine can report, in id order.
    pub const ALL: [u32; 10] = [
        DENYLIST,
        NVML_LIBRARY,
        CUDA_MAIN_LIBRARY,
        CUDA_RUNTIME_LIBRARY,
        PERMISSIONS,
        PERSISTENCE_MODE,
        ENVIRONMENT,
        PAGE_RETIREMENT,
        GRAPHICS_PROCESSES,
        INFOROM,
    ];
}

/// Identifier of one target entity (e.g. a single accelerator).
///
/// Only unique within one response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle naming a set of target entities.
///
/// Created by whoever manages groups on the engine; the diagnostic core only
/// passes it through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GroupHandle(u64);

impl GroupHandle {
    pub fn from_raw(raw: u64) -> Self {
        GroupHandle(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_level_raw_values() {
        assert_eq!(NativeDiagLevel::Invalid.as_raw(), 0);
        assert_eq!(NativeDiagLevel::Short.as_raw(), 10);
        assert_eq!(NativeDiagLevel::Medium.as_raw(), 20);
        assert_eq!(NativeDiagLevel::Long.as_raw(), 30);
        assert_eq!(NativeDiagLevel::ExtraLong.as_raw(), 40);
    }

    #[test]
    fn test_native_level_validity() {
        assert!(!NativeDiagLevel::Invalid.is_valid());
        assert!(NativeDiagLevel::Short.is_valid());
        assert!(NativeDiagLevel::ExtraLong.is_valid());
    }

    #[test]
    fn test_sw_test_ids_are_distinct() {
        let mut ids = sw_test::ALL.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sw_test::ALL.len());
    }

    #[test]
    fn test_group_handle_round_trip() {
        let group = GroupHandle::from_raw(42);
        assert_eq!(group.as_raw(), 42);
        assert_eq!(group.to_string(), "42");
    }
}
