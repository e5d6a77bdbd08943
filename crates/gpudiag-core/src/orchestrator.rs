//! Diagnostic run orchestration.
//!
//! One call resolves the requested level, issues a single run against the
//! engine, and decodes the response:
//!
//! - undefined level: rejected with [`DiagError::InvalidLevel`]; the engine
//!   is never contacted
//! - engine failure: [`DiagError::Engine`] with the engine's code and
//!   message; no partial results
//! - success: one [`DiagResult`] per raw result entry, in engine order
//!
//! There are no retries, no caching and no timeout. The call occupies the
//! caller until the engine finishes the requested level.

use std::time::Instant;

use gpudiag_engine::{DiagSession, GroupHandle, RawDiagResponse};
use tracing::{debug, Instrument};
use uuid::Uuid;

use crate::builder::build_indexed;
use crate::decoder::ResponseIndex;
use crate::error::{DiagError, Result};
use crate::labels::level_for;
use crate::level::DiagLevel;
use crate::obs;
use crate::result::{DiagResult, DiagResults};

/// Run diagnostic `level` against `group` through `session` and decode the
/// outcome.
pub async fn run_diag(
    session: &dyn DiagSession,
    level: DiagLevel,
    group: GroupHandle,
) -> Result<DiagResults> {
    let run_id = Uuid::new_v4().to_string();
    execute(session, level, group)
        .instrument(obs::run_span(&run_id))
        .await
}

async fn execute(
    session: &dyn DiagSession,
    level: DiagLevel,
    group: GroupHandle,
) -> Result<DiagResults> {
    let native_level = level_for(level);
    if !native_level.is_valid() {
        obs::emit_run_rejected(level.as_raw());
        return Err(DiagError::InvalidLevel(level.as_raw()));
    }

    let start = Instant::now();
    obs::emit_run_started(group.as_raw(), &level.to_string(), native_level.as_raw());

    let mut response = RawDiagResponse::new();
    if let Err(err) = session
        .run_diagnostic(group, native_level, &mut response)
        .await
    {
        obs::emit_run_failed(err.status.code(), &err.message, elapsed_ms(start));
        return Err(err.into());
    }

    let results = decode_response(&response);
    obs::emit_run_finished(elapsed_ms(start), results.len(), results.failed_count());
    Ok(results)
}

/// Decode a populated response buffer into results.
///
/// Correlation records are indexed once, then every result entry is turned
/// into a row in array order.
pub fn decode_response(response: &RawDiagResponse) -> DiagResults {
    let index = ResponseIndex::new(response);
    debug!(
        results = response.results().len(),
        errors = response.errors().len(),
        info = response.info().len(),
        "decoding diagnostic response"
    );

    let software: Vec<DiagResult> = response
        .results()
        .iter()
        .map(|entry| build_indexed(entry, &index))
        .collect();

    DiagResults { software }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_result;
    use gpudiag_engine::codes::{result_status, sw_test};
    use gpudiag_engine::{EntityId, RawDiagResult};

    #[test]
    fn test_decode_empty_response() {
        let results = decode_response(&RawDiagResponse::new());
        assert!(results.software.is_empty());
    }

    #[test]
    fn test_decode_matches_per_entry_builder() {
        let mut response = RawDiagResponse::new();
        for (entity, test_id, result) in [
            (0u32, sw_test::DENYLIST, result_status::PASS),
            (1, sw_test::INFOROM, result_status::WARN),
            (0, sw_test::ENVIRONMENT, result_status::NOT_RUN),
        ] {
            response
                .push_result(RawDiagResult {
                    entity_id: EntityId(entity),
                    test_id,
                    result,
                })
                .unwrap();
        }
        response.push_error(EntityId(1), 3, "inforom checksum").unwrap();
        response.push_info(EntityId(0), "nouveau not loaded").unwrap();

        let results = decode_response(&response);
        assert_eq!(results.len(), 3);
        for (i, row) in results.iter().enumerate() {
            assert_eq!(*row, build_result(i, &response));
        }
        assert_eq!(results.software[1].status, "warn");
        assert_eq!(results.software[2].test_output, "nouveau not loaded");
    }
}
