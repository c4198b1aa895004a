// Content-derived identity. List position deliberately never participates:
// re-running a generative extraction reorders entries, and a positional key
// would scramble the user's completion flags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::structuring::{Schedule, ScheduleEntry, TimeBuckets, TimeOfDay};

/// Fixed namespace for entry ids; ids are UUIDv5 of the normalized content
/// key under it.
const ENTRY_NAMESPACE: Uuid = Uuid::from_u128(0x1b4a_9d80_c1f3_4e02_b7a5_d2a6_e35c_9f10);

/// A schedule entry plus its stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub entry: ScheduleEntry,
}

/// Derive a stable id for every entry of a normalized schedule.
///
/// Equal (medicine, dosage, category) after trimming and lowercasing always
/// hash to the same id. Duplicates within one result get a `#2`, `#3`…
/// suffix on the key, ordered by first occurrence: no two entries in a
/// result share an id, and ids stay deterministic for a given ordering.
pub fn assign_ids(schedule: &Schedule) -> TimeBuckets<IdentifiedEntry> {
    let mut occurrences: HashMap<String, u32> = HashMap::new();
    let mut identified = TimeBuckets::default();

    for category in TimeOfDay::ALL {
        for entry in schedule.bucket(category) {
            let base = identity_key(entry);
            let count = occurrences
                .entry(base.clone())
                .and_modify(|n| *n += 1)
                .or_insert(1);
            let key = if *count == 1 {
                base
            } else {
                format!("{base}#{count}")
            };

            identified.bucket_mut(category).push(IdentifiedEntry {
                id: Uuid::new_v5(&ENTRY_NAMESPACE, key.as_bytes()),
                entry: entry.clone(),
            });
        }
    }

    identified
}

/// Normalized content key for an entry.
fn identity_key(entry: &ScheduleEntry) -> String {
    format!(
        "{}|{}|{}",
        entry.medicine.trim().to_lowercase(),
        entry.dosage.trim().to_lowercase(),
        entry.category.as_str()
    )
}
