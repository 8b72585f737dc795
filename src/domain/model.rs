use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Upper bound of exercises kept per muscle in a [`WorkoutPlan`].
pub const MAX_EXERCISES_PER_MUSCLE: usize = 3;

/// Marker recorded for rest days in a [`SplitPlan`].
pub const REST_DAY: &str = "Rest day";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

/// Constraints for a single exercise lookup. Empty type/difficulty strings
/// are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub muscle: String,
    pub exercise_type: Option<String>,
    pub difficulty: Option<String>,
}

impl ExerciseQuery {
    pub fn new(muscle: impl Into<String>, exercise_type: &str, difficulty: &str) -> Self {
        Self {
            muscle: muscle.into(),
            exercise_type: non_empty(exercise_type),
            difficulty: non_empty(difficulty),
        }
    }

    /// Case-insensitive filter used by offline tables.
    pub fn matches(&self, record: &ExerciseRecord) -> bool {
        let matches_type = self
            .exercise_type
            .as_deref()
            .map_or(true, |t| record.exercise_type.to_lowercase() == t.to_lowercase());
        let matches_difficulty = self
            .difficulty
            .as_deref()
            .map_or(true, |d| record.difficulty.to_lowercase() == d.to_lowercase());
        matches_type && matches_difficulty
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Muscle -> exercises, kept in the order muscles were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutPlan {
    entries: Vec<(String, Vec<ExerciseRecord>)>,
}

impl WorkoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts exercises for a muscle, keeping at most
    /// [`MAX_EXERCISES_PER_MUSCLE`]. A repeated muscle keeps its original
    /// position and takes the new exercises.
    pub fn insert(&mut self, muscle: impl Into<String>, mut exercises: Vec<ExerciseRecord>) {
        exercises.truncate(MAX_EXERCISES_PER_MUSCLE);
        let muscle = muscle.into();
        match self.entries.iter_mut().find(|(m, _)| *m == muscle) {
            Some((_, existing)) => *existing = exercises,
            None => self.entries.push((muscle, exercises)),
        }
    }

    pub fn get(&self, muscle: &str) -> Option<&[ExerciseRecord]> {
        self.entries
            .iter()
            .find(|(m, _)| m == muscle)
            .map(|(_, exercises)| exercises.as_slice())
    }

    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(m, _)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ExerciseRecord])> {
        self.entries
            .iter()
            .map(|(m, exercises)| (m.as_str(), exercises.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for WorkoutPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (muscle, exercises) in &self.entries {
            map.serialize_entry(muscle, exercises)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayPlan {
    Rest,
    Workout(WorkoutPlan),
}

impl DayPlan {
    pub fn is_rest(&self) -> bool {
        matches!(self, DayPlan::Rest)
    }

    pub fn workout(&self) -> Option<&WorkoutPlan> {
        match self {
            DayPlan::Rest => None,
            DayPlan::Workout(plan) => Some(plan),
        }
    }
}

impl Serialize for DayPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DayPlan::Rest => serializer.serialize_str(REST_DAY),
            DayPlan::Workout(plan) => plan.serialize(serializer),
        }
    }
}

/// A week produced from a split template, keyed by "Day N".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    pub name: String,
    days: Vec<(String, DayPlan)>,
}

impl SplitPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: Vec::new(),
        }
    }

    pub fn push_day(&mut self, day: u8, plan: DayPlan) {
        self.days.push((day_label(day), plan));
    }

    pub fn get(&self, label: &str) -> Option<&DayPlan> {
        self.days
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, plan)| plan)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(l, _)| l.as_str())
    }

    pub fn days(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(l, plan)| (l.as_str(), plan))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for SplitPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (label, plan) in &self.days {
            map.serialize_entry(label, plan)?;
        }
        map.end()
    }
}

pub fn day_label(day: u8) -> String {
    format!("Day {}", day)
}

/// Recommended reps are either a range ("10-12") or, for the fallback, a
/// bare count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reps {
    Range(&'static str),
    Count(u32),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Range(range) => f.write_str(range),
            Reps::Count(count) => write!(f, "{}", count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetsReps {
    pub sets: u32,
    pub reps: Reps,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, exercise_type: &str, difficulty: &str) -> ExerciseRecord {
        ExerciseRecord {
            name: name.to_string(),
            exercise_type: exercise_type.to_string(),
            muscle: "biceps".to_string(),
            equipment: "dumbbell".to_string(),
            difficulty: difficulty.to_string(),
            instructions: String::new(),
        }
    }

    #[test]
    fn test_query_treats_empty_strings_as_absent() {
        let query = ExerciseQuery::new("biceps", "", "");
        assert_eq!(query.exercise_type, None);
        assert_eq!(query.difficulty, None);
        assert!(query.matches(&record("Curl", "strength", "beginner")));
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let query = ExerciseQuery::new("biceps", "STRENGTH", "Beginner");
        assert!(query.matches(&record("Curl", "strength", "beginner")));
        assert!(!query.matches(&record("Curl", "strength", "expert")));
        assert!(!query.matches(&record("Curl", "cardio", "beginner")));
    }

    #[test]
    fn test_workout_plan_caps_and_keeps_order() {
        let mut plan = WorkoutPlan::new();
        plan.insert(
            "chest",
            (0..5).map(|i| record(&format!("Press {}", i), "strength", "")).collect(),
        );
        plan.insert("abdominals", vec![]);

        assert_eq!(plan.get("chest").unwrap().len(), MAX_EXERCISES_PER_MUSCLE);
        assert_eq!(plan.get("chest").unwrap()[2].name, "Press 2");
        assert_eq!(plan.muscles().collect::<Vec<_>>(), vec!["chest", "abdominals"]);
    }

    #[test]
    fn test_workout_plan_repeated_muscle_replaces_in_place() {
        let mut plan = WorkoutPlan::new();
        plan.insert("chest", vec![record("Old", "", "")]);
        plan.insert("triceps", vec![]);
        plan.insert("chest", vec![record("New", "", "")]);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.muscles().collect::<Vec<_>>(), vec!["chest", "triceps"]);
        assert_eq!(plan.get("chest").unwrap()[0].name, "New");
    }

    #[test]
    fn test_split_plan_serializes_rest_marker_and_order() {
        let mut workout = WorkoutPlan::new();
        workout.insert("shoulders", vec![record("Front Raise", "Powerlifting", "Beginner")]);

        let mut plan = SplitPlan::new("tiny");
        plan.push_day(1, DayPlan::Workout(workout));
        plan.push_day(2, DayPlan::Rest);

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.starts_with(r#"{"Day 1":{"shoulders":[{"name":"Front Raise","type":"Powerlifting""#));
        assert!(json.ends_with(r#""Day 2":"Rest day"}"#));
    }

    #[test]
    fn test_reps_serialize_untagged() {
        let range = SetsReps { sets: 3, reps: Reps::Range("10-12") };
        let count = SetsReps { sets: 3, reps: Reps::Count(10) };

        assert_eq!(serde_json::to_value(range).unwrap(), serde_json::json!({"sets": 3, "reps": "10-12"}));
        assert_eq!(serde_json::to_value(count).unwrap(), serde_json::json!({"sets": 3, "reps": 10}));
        assert_eq!(count.reps.to_string(), "10");
    }

    #[test]
    fn test_record_decodes_partial_payload() {
        let record: ExerciseRecord = serde_json::from_value(serde_json::json!({
            "name": "Hammer Curl",
            "type": "strength",
            "muscle": "biceps",
            "difficulty": "beginner",
            "safety_info": "ignored"
        }))
        .unwrap();

        assert_eq!(record.exercise_type, "strength");
        assert_eq!(record.equipment, "");
    }
}
