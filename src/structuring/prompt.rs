/// Instruction sent to the inference service alongside the prescription scan.
///
/// The model is asked for strict JSON, but replies routinely arrive wrapped
/// in commentary or code fences anyway; the extractor's brace heuristic
/// absorbs that. The transport that sends this prompt is not part of this
/// crate.
pub const EXTRACTION_PROMPT: &str = "Extract medicine name, dosage, and timing \
from this prescription and categorize them into morning, afternoon, and \
evening. Return only in strict JSON format. Don't include any extra text or \
symbols.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structuring::TimeOfDay;

    #[test]
    fn prompt_names_every_bucket() {
        for category in TimeOfDay::ALL {
            assert!(EXTRACTION_PROMPT.contains(category.as_str()));
        }
    }
}
