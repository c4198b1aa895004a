// First-'{' to last-'}' heuristic, matching what the model is prompted to
// return: commentary around a single top-level JSON object. Multiple sibling
// objects, or braces inside the commentary itself, are out of contract.

use super::StructuringError;

/// Isolate the candidate JSON payload from a freeform model reply.
pub fn extract_payload(raw: &str) -> Result<&str, StructuringError> {
    let start = raw.find('{').ok_or(StructuringError::NoPayloadFound)?;
    let end = raw.rfind('}').ok_or(StructuringError::NoPayloadFound)?;
    if end < start {
        return Err(StructuringError::NoPayloadFound);
    }
    Ok(&raw[start..=end])
}
