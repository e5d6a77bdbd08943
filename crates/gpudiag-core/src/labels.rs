//! Code -> label lookups.
//!
//! All lookups are total: unknown codes map to an empty label (or the
//! invalid level) instead of failing.

use gpudiag_engine::codes::{result_status, sw_test};
use gpudiag_engine::NativeDiagLevel;

use crate::level::DiagLevel;

/// Label for a native per-test result status.
pub fn result_status_label(code: i32) -> &'static str {
    match code {
        result_status::PASS => "pass",
        result_status::SKIP => "skipped",
        result_status::WARN => "warn",
        result_status::FAIL => "fail",
        result_status::NOT_RUN => "notrun",
        _ => "",
    }
}

/// Human-readable description of a software-prerequisite test.
pub fn test_label(test_id: u32) -> &'static str {
    match test_id {
        sw_test::DENYLIST => "presence of drivers on the denylist (e.g. nouveau)",
        sw_test::NVML_LIBRARY => "presence (and version) of NVML lib",
        sw_test::CUDA_MAIN_LIBRARY => "presence (and version) of CUDA lib",
        sw_test::CUDA_RUNTIME_LIBRARY => "presence (and version) of CUDA RT lib",
        sw_test::PERMISSIONS => "character device permissions",
        sw_test::PERSISTENCE_MODE => "persistence mode enabled",
        sw_test::ENVIRONMENT => "CUDA environment vars that may slow tests",
        sw_test::PAGE_RETIREMENT => "pending frame buffer page retirement",
        sw_test::GRAPHICS_PROCESSES => "graphics processes running",
        sw_test::INFOROM => "inforom corruption",
        _ => "",
    }
}

/// Native engine level for a requested depth. Undefined levels map to
/// [`NativeDiagLevel::Invalid`].
pub fn level_for(level: DiagLevel) -> NativeDiagLevel {
    match level {
        DiagLevel::QUICK => NativeDiagLevel::Short,
        DiagLevel::MEDIUM => NativeDiagLevel::Medium,
        DiagLevel::LONG => NativeDiagLevel::Long,
        DiagLevel::EXTENDED => NativeDiagLevel::ExtraLong,
        _ => NativeDiagLevel::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_level_for_defined_levels_are_distinct_and_valid() {
        let natives: HashSet<NativeDiagLevel> =
            DiagLevel::ALL.iter().map(|l| level_for(*l)).collect();
        assert_eq!(natives.len(), 4);
        assert!(natives.iter().all(|n| n.is_valid()));
    }

    #[test]
    fn test_level_for_preserves_order() {
        let natives: Vec<NativeDiagLevel> = DiagLevel::ALL.iter().map(|l| level_for(*l)).collect();
        assert!(natives.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_level_for_other_integers_is_invalid() {
        for raw in [-1, 0, 5, 10, 99, i32::MAX, i32::MIN] {
            assert_eq!(
                level_for(DiagLevel::from_raw(raw)),
                NativeDiagLevel::Invalid,
                "raw level {raw}"
            );
        }
    }

    #[test]
    fn test_result_status_labels() {
        let expected: HashSet<&str> = ["pass", "skipped", "warn", "fail", "notrun"]
            .into_iter()
            .collect();
        let labels: HashSet<&str> = (0..=4).map(result_status_label).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_result_status_unknown_is_empty() {
        assert_eq!(result_status_label(5), "");
        assert_eq!(result_status_label(-1), "");
        assert_eq!(result_status_label(i32::MAX), "");
    }

    #[test]
    fn test_known_test_labels_are_non_empty() {
        for id in sw_test::ALL {
            assert!(!test_label(id).is_empty(), "test id {id}");
        }
        assert_eq!(test_label(sw_test::PERMISSIONS), "character device permissions");
    }

    #[test]
    fn test_unknown_test_label_is_empty() {
        assert_eq!(test_label(10), "");
        assert_eq!(test_label(u32::MAX), "");
    }
}
