// Merges a freshly identified schedule with prior completion state. Flags
// are carried by id, never by position, so re-extraction keeps whatever
// progress still applies.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::structuring::TimeBuckets;

use super::{ChecklistState, IdentifiedEntry};

/// Merge a new identified schedule with whatever state was stored before.
///
/// Ids present in both keep their prior flag; new ids start unchecked; ids
/// absent from the new schedule are dropped along with their flags. Bucket
/// ordering follows the new schedule. Reconciling an unchanged schedule
/// against its own state is a no-op on the flags.
pub fn reconcile(
    identified: TimeBuckets<IdentifiedEntry>,
    previous: Option<&ChecklistState>,
) -> ChecklistState {
    let mut done = BTreeMap::new();
    let mut carried = 0usize;

    for entry in identified.iter() {
        let prior = previous.and_then(|state| state.done.get(&entry.id).copied());
        if prior.is_some() {
            carried += 1;
        }
        done.insert(entry.id, prior.unwrap_or(false));
    }

    tracing::debug!(entries = done.len(), carried, "reconciled checklist state");

    ChecklistState {
        schedule: identified,
        done,
        extracted_at: Utc::now(),
    }
}
