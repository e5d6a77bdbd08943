//! Normalized diagnostic results.

use serde::{Deserialize, Serialize};

/// Outcome of one test on one entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagResult {
    /// Status label (`pass`, `skipped`, `warn`, `fail`, `notrun`), empty when
    /// the engine reported an unknown status.
    pub status: String,

    /// Description of the test, empty for unknown test ids.
    pub test_name: String,

    /// Informational message for the entity, possibly empty.
    pub test_output: String,

    /// Engine error code for the entity, zero if none.
    pub error_code: u32,

    /// Engine error message for the entity, possibly empty.
    pub error_message: String,
}

impl DiagResult {
    pub fn passed(&self) -> bool {
        self.status == "pass"
    }

    pub fn failed(&self) -> bool {
        self.status == "fail"
    }
}

/// All results of one diagnostic run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagResults {
    /// Software-prerequisite test results, in engine order.
    pub software: Vec<DiagResult>,
}

impl DiagResults {
    pub fn len(&self) -> usize {
        self.software.len()
    }

    pub fn is_empty(&self) -> bool {
        self.software.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagResult> {
        self.software.iter()
    }

    /// Number of tests that passed.
    pub fn passed_count(&self) -> usize {
        self.software.iter().filter(|r| r.passed()).count()
    }

    /// Number of tests that failed.
    pub fn failed_count(&self) -> usize {
        self.software.iter().filter(|r| r.failed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.software.iter().any(|r| r.failed())
    }
}

impl<'a> IntoIterator for &'a DiagResults {
    type Item = &'a DiagResult;
    type IntoIter = std::slice::Iter<'a, DiagResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.software.iter()
    }
}
