use serde::{Deserialize, Serialize};

/// The three fixed dosing buckets of a daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    /// Case-insensitive bucket-key match ("Morning", "EVENING", ...).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            _ => None,
        }
    }
}

/// One medication line of the canonical schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub medicine: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub timing: String,
    pub category: TimeOfDay,
}

/// Ordered per-bucket sequences. Generic over the entry type so the same
/// shape carries both plain and identified entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TimeBuckets<T> {
    #[serde(default)]
    pub morning: Vec<T>,
    #[serde(default)]
    pub afternoon: Vec<T>,
    #[serde(default)]
    pub evening: Vec<T>,
}

/// The canonical three-bucket schedule.
pub type Schedule = TimeBuckets<ScheduleEntry>;

impl<T> Default for TimeBuckets<T> {
    fn default() -> Self {
        Self {
            morning: Vec::new(),
            afternoon: Vec::new(),
            evening: Vec::new(),
        }
    }
}

impl<T> TimeBuckets<T> {
    pub fn bucket(&self, category: TimeOfDay) -> &[T] {
        match category {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
        }
    }

    pub fn bucket_mut(&mut self, category: TimeOfDay) -> &mut Vec<T> {
        match category {
            TimeOfDay::Morning => &mut self.morning,
            TimeOfDay::Afternoon => &mut self.afternoon,
            TimeOfDay::Evening => &mut self.evening,
        }
    }

    /// All entries in fixed bucket order, morning first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.morning
            .iter()
            .chain(self.afternoon.iter())
            .chain(self.evening.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_key_matching_is_case_insensitive() {
        assert_eq!(TimeOfDay::from_key("Morning"), Some(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::from_key("AFTERNOON"), Some(TimeOfDay::Afternoon));
        assert_eq!(TimeOfDay::from_key(" evening "), Some(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_key("night"), None);
    }

    #[test]
    fn time_of_day_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TimeOfDay::Morning).unwrap(),
            "\"morning\""
        );
    }

    #[test]
    fn buckets_iterate_morning_first() {
        let mut buckets: TimeBuckets<&str> = TimeBuckets::default();
        buckets.evening.push("c");
        buckets.morning.push("a");
        buckets.afternoon.push("b");

        let order: Vec<&str> = buckets.iter().copied().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(buckets.entry_count(), 3);
        assert!(!buckets.is_empty());
    }

    #[test]
    fn missing_buckets_deserialize_empty() {
        let schedule: Schedule = serde_json::from_str(r#"{"morning": []}"#).unwrap();
        assert!(schedule.is_empty());
    }
}
