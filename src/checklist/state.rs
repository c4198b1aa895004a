use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::structuring::TimeBuckets;

use super::IdentifiedEntry;

/// The persisted, user-checkable schedule: identified entries per bucket
/// plus one done flag per entry id. Serialized as a single blob; the UI
/// renders `schedule` and reads `done[entry.id]` for each checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistState {
    pub schedule: TimeBuckets<IdentifiedEntry>,
    pub done: BTreeMap<Uuid, bool>,
    pub extracted_at: DateTime<Utc>,
}

impl ChecklistState {
    /// Flip the done flag for an entry and return the new value.
    ///
    /// Direct user toggles mutate no derived structure, so they bypass the
    /// engine entirely. `None` for an id not in the current schedule.
    pub fn toggle(&mut self, id: Uuid) -> Option<bool> {
        let flag = self.done.get_mut(&id)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_done(&self, id: Uuid) -> bool {
        self.done.get(&id).copied().unwrap_or(false)
    }

    pub fn entry_count(&self) -> usize {
        self.schedule.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{assign_ids, reconcile};
    use crate::structuring::{Schedule, ScheduleEntry, TimeOfDay};

    fn sample_state() -> ChecklistState {
        let mut schedule = Schedule::default();
        schedule.morning.push(ScheduleEntry {
            medicine: "Paracetamol".to_string(),
            dosage: "500mg".to_string(),
            timing: "after breakfast".to_string(),
            category: TimeOfDay::Morning,
        });
        reconcile(assign_ids(&schedule), None)
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut state = sample_state();
        let id = state.schedule.morning[0].id;

        assert!(!state.is_done(id));
        assert_eq!(state.toggle(id), Some(true));
        assert!(state.is_done(id));
        assert_eq!(state.toggle(id), Some(false));
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let mut state = sample_state();
        assert_eq!(state.toggle(Uuid::nil()), None);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = sample_state();
        let blob = serde_json::to_string(&state).unwrap();
        let restored: ChecklistState = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, state);
    }
}
