//! Single entry point composing extraction, normalization, identity
//! assignment and reconciliation. Pure and synchronous: one model reply in,
//! one reconciled state out, no I/O, no shared mutable state. The caller
//! serializes concurrent extractions (at most one in flight per session)
//! and owns retries against the inference service.

use crate::checklist::{assign_ids, reconcile, ChecklistState};
use crate::structuring::{
    extract_payload, normalize_schedule, reply_text, StructuringError,
};

/// Successful extraction: the reconciled state plus human-readable notes
/// about anything dropped or defaulted along the way. Diagnostics never
/// block success; they are for logging and telemetry.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub state: ChecklistState,
    pub diagnostics: Vec<String>,
}

/// Run the pipeline on a raw model reply.
///
/// `previous` is only borrowed: on any failure the caller still holds its
/// last valid state, so the user-visible behavior is "nothing changed, try
/// again" rather than data loss.
pub fn run(
    raw: &str,
    previous: Option<&ChecklistState>,
) -> Result<ExtractionOutcome, StructuringError> {
    let candidate = extract_payload(raw)?;
    let normalized = normalize_schedule(candidate)?;
    let identified = assign_ids(&normalized.schedule);
    let state = reconcile(identified, previous);

    tracing::info!(
        entries = state.entry_count(),
        dropped = normalized.diagnostics.len(),
        "prescription extraction completed"
    );

    Ok(ExtractionOutcome {
        state,
        diagnostics: normalized.diagnostics,
    })
}

/// Run the pipeline on a full inference response body, envelope included.
pub fn run_on_response(
    body: &str,
    previous: Option<&ChecklistState>,
) -> Result<ExtractionOutcome, StructuringError> {
    let reply = reply_text(body)?;
    run(&reply, previous)
}
