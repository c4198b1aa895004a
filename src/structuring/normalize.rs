// Lenient coercion of the extracted payload into the canonical schedule.
// One malformed record never fails the batch; only a payload that cannot be
// parsed as JSON at all does.

use serde_json::{Map, Value};

use super::types::{Schedule, ScheduleEntry, TimeOfDay};
use super::StructuringError;

/// A normalized schedule plus per-entry diagnostics for anything dropped
/// or defaulted along the way.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSchedule {
    pub schedule: Schedule,
    pub diagnostics: Vec<String>,
}

/// Coerce a candidate payload into the canonical three-bucket schedule.
///
/// Bucket keys are matched case-insensitively; absent buckets are valid and
/// normalize to empty lists. Records missing a non-empty `medicine` are
/// dropped with a diagnostic; `dosage` and `timing` default to empty strings.
pub fn normalize_schedule(candidate: &str) -> Result<NormalizedSchedule, StructuringError> {
    let value: Value =
        serde_json::from_str(candidate).map_err(|e| StructuringError::MalformedPayload {
            candidate: candidate.to_string(),
            detail: e.to_string(),
        })?;

    let map = value
        .as_object()
        .ok_or_else(|| StructuringError::MalformedPayload {
            candidate: candidate.to_string(),
            detail: "top-level value is not an object".to_string(),
        })?;

    let mut out = NormalizedSchedule::default();

    for (key, bucket_value) in map {
        let Some(category) = TimeOfDay::from_key(key) else {
            // Forward-compatible: the model may add commentary fields. Only
            // an array under an unknown key looks like a lost bucket.
            if bucket_value.is_array() {
                out.diagnostics
                    .push(format!("ignored unrecognized bucket key `{key}`"));
            }
            continue;
        };

        let Some(records) = bucket_value.as_array() else {
            out.diagnostics.push(format!(
                "bucket `{}` is not a list, treated as empty",
                category.as_str()
            ));
            continue;
        };

        for (index, record) in records.iter().enumerate() {
            match coerce_entry(record, category) {
                Ok(entry) => out.schedule.bucket_mut(category).push(entry),
                Err(reason) => out.diagnostics.push(format!(
                    "dropped {} entry {index}: {reason}",
                    category.as_str()
                )),
            }
        }
    }

    if !out.diagnostics.is_empty() {
        tracing::warn!(
            dropped = out.diagnostics.len(),
            "schedule normalization dropped or defaulted records"
        );
    }

    Ok(out)
}

/// Coerce one record into a `ScheduleEntry`.
fn coerce_entry(record: &Value, category: TimeOfDay) -> Result<ScheduleEntry, String> {
    let fields = record
        .as_object()
        .ok_or_else(|| "not an object".to_string())?;

    let medicine = field(fields, "medicine")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if medicine.is_empty() {
        return Err("missing or empty `medicine`".to_string());
    }

    Ok(ScheduleEntry {
        medicine: medicine.to_string(),
        dosage: text_field(fields, "dosage"),
        timing: text_field(fields, "timing"),
        category,
    })
}

/// Optional string field, trimmed, defaulting to empty.
fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    field(fields, name)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// Case-insensitive field lookup ("Medicine" and "medicine" both match).
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}
