//! Turns raw result entries into [`DiagResult`] rows.

use gpudiag_engine::{RawDiagResponse, RawDiagResult};

use crate::decoder::{find_error, find_info, ResponseIndex};
use crate::labels::{result_status_label, test_label};
use crate::result::DiagResult;

/// Build the row for `results[result_index]`.
///
/// Pure and total: unknown codes become empty labels, missing error/info
/// records become empty/zero fields, and an out-of-range index yields an
/// empty row.
pub fn build_result(result_index: usize, response: &RawDiagResponse) -> DiagResult {
    let Some(entry) = response.results().get(result_index) else {
        return DiagResult::default();
    };
    let (error_message, error_code) = find_error(entry.entity_id, response);
    let info = find_info(entry.entity_id, response);
    assemble(entry, error_message, error_code, info)
}

/// Build the row for `entry` using a prebuilt correlation index.
pub fn build_indexed(entry: &RawDiagResult, index: &ResponseIndex<'_>) -> DiagResult {
    let (error_message, error_code) = index.error_for(entry.entity_id);
    assemble(entry, error_message, error_code, index.info_for(entry.entity_id))
}

fn assemble(entry: &RawDiagResult, error_message: &str, error_code: u32, info: &str) -> DiagResult {
    DiagResult {
        status: result_status_label(entry.result).to_string(),
        test_name: test_label(entry.test_id).to_string(),
        test_output: info.to_string(),
        error_code,
        error_message: error_message.to_string(),
    }
}
