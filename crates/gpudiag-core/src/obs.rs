//! Structured observability hooks for diagnostic runs.
//!
//! - `run_span` scoping all logs of one run under its run id
//! - emitters for the run lifecycle: started, rejected, failed, finished
//!
//! Events are emitted at `info!` (failures at `warn!`); filter with
//! `RUST_LOG`.

use tracing::{info, warn};

/// Span scoping every log line of one run under its run id.
///
/// Attach it with `tracing::Instrument` so it follows the run across awaits.
pub fn run_span(run_id: &str) -> tracing::Span {
    tracing::info_span!("gpudiag.run", run_id = %run_id)
}

/// Emit event: run dispatched to the engine.
pub fn emit_run_started(group: u64, level: &str, native_level: i32) {
    info!(
        event = "diag.run.started",
        group = group,
        level = %level,
        native_level = native_level,
    );
}

/// Emit event: run refused before reaching the engine.
pub fn emit_run_rejected(level: i32) {
    warn!(event = "diag.run.rejected", level = level, reason = "invalid level");
}

/// Emit event: engine reported failure.
pub fn emit_run_failed(code: i32, message: &str, duration_ms: u64) {
    warn!(
        event = "diag.run.failed",
        code = code,
        message = %message,
        duration_ms = duration_ms,
    );
}

/// Emit event: run decoded.
pub fn emit_run_finished(duration_ms: u64, total: usize, failed: usize) {
    info!(
        event = "diag.run.finished",
        duration_ms = duration_ms,
        total = total,
        failed = failed,
    );
}
