//! Weekly split templates and their expansion into a [`SplitPlan`].

use crate::core::retrieval::ExerciseRetriever;
use crate::core::workout::assemble_workout;
use crate::domain::model::{DayPlan, SplitPlan};
use crate::utils::error::{PlannerError, Result};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Rest,
    Train(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpec {
    pub day: u8,
    pub kind: DayKind,
}

const fn train(day: u8, muscles: &'static [&'static str]) -> DaySpec {
    DaySpec {
        day,
        kind: DayKind::Train(muscles),
    }
}

const fn rest(day: u8) -> DaySpec {
    DaySpec {
        day,
        kind: DayKind::Rest,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub days: [DaySpec; DAYS_PER_WEEK],
}

const PUSH: &[&str] = &["chest", "shoulders", "triceps"];
const LEGS_ADDUCTORS: &[&str] = &["quadriceps", "hamstrings", "adductors", "glutes"];
const LEGS_ABDUCTORS: &[&str] = &["quadriceps", "hamstrings", "abductors", "glutes"];
const ARMS_AND_SHOULDERS: &[&str] = &["shoulders", "biceps", "triceps"];
const FULL_BODY: &[&str] = &[
    "chest",
    "lats",
    "quadriceps",
    "hamstrings",
    "glutes",
    "biceps",
    "triceps",
    "shoulders",
];

pub const SPLIT_TEMPLATES: &[SplitTemplate] = &[
    SplitTemplate {
        name: "pplSplit",
        days: [
            train(1, PUSH),
            train(2, &["lats", "middle_back", "biceps"]),
            train(3, LEGS_ADDUCTORS),
            rest(4),
            train(5, PUSH),
            train(6, &["lats", "lower_back", "biceps"]),
            train(7, LEGS_ABDUCTORS),
        ],
    },
    SplitTemplate {
        name: "arnoldSplit",
        days: [
            train(1, &["chest", "lats", "middle_back"]),
            train(2, ARMS_AND_SHOULDERS),
            train(3, LEGS_ADDUCTORS),
            train(4, &["chest", "lats", "lower_back"]),
            train(5, ARMS_AND_SHOULDERS),
            train(6, LEGS_ABDUCTORS),
            rest(7),
        ],
    },
    SplitTemplate {
        name: "fullBodySplit",
        days: [
            train(1, FULL_BODY),
            rest(2),
            train(3, FULL_BODY),
            rest(4),
            train(5, FULL_BODY),
            rest(6),
            rest(7),
        ],
    },
    SplitTemplate {
        name: "upperLowerSplit",
        days: [
            train(1, &["chest", "lats", "middle_back", "biceps", "triceps", "shoulders"]),
            train(2, LEGS_ADDUCTORS),
            rest(3),
            train(4, &["chest", "lats", "lower_back", "biceps", "triceps", "shoulders"]),
            train(5, LEGS_ABDUCTORS),
            rest(6),
            rest(7),
        ],
    },
    SplitTemplate {
        name: "fourDaySplit",
        days: [
            train(1, &["lats", "middle_back", "biceps"]),
            train(2, &["chest", "triceps"]),
            rest(3),
            train(4, LEGS_ADDUCTORS),
            train(5, &["shoulders"]),
            rest(6),
            rest(7),
        ],
    },
    SplitTemplate {
        name: "fiveDaySplit",
        days: [
            train(1, &["chest"]),
            train(2, &["lats", "middle_back"]),
            train(3, &["shoulders", "traps"]),
            train(4, &["quadriceps", "hamstrings", "glutes"]),
            train(5, &["biceps", "triceps"]),
            rest(6),
            rest(7),
        ],
    },
];

impl SplitTemplate {
    /// Days must be numbered 1 through 7 in order and active days need at
    /// least one muscle.
    pub fn validate(&self) -> Result<()> {
        for (index, spec) in self.days.iter().enumerate() {
            let expected = index + 1;
            if usize::from(spec.day) != expected {
                return Err(PlannerError::InvalidTemplateError {
                    name: self.name.to_string(),
                    reason: format!("day {} found at position {}", spec.day, expected),
                });
            }
            if let DayKind::Train(muscles) = spec.kind {
                if muscles.is_empty() {
                    return Err(PlannerError::InvalidTemplateError {
                        name: self.name.to_string(),
                        reason: format!("day {} has no muscles", spec.day),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn training_days(&self) -> usize {
        self.days
            .iter()
            .filter(|spec| matches!(spec.kind, DayKind::Train(_)))
            .count()
    }
}

pub fn split_names() -> impl Iterator<Item = &'static str> {
    SPLIT_TEMPLATES.iter().map(|template| template.name)
}

/// Looks up a template by its exact name.
pub fn find_template(name: &str) -> Result<&'static SplitTemplate> {
    let template = SPLIT_TEMPLATES
        .iter()
        .find(|template| template.name == name)
        .ok_or_else(|| PlannerError::InvalidSplitError {
            name: name.to_string(),
        })?;
    template.validate()?;
    Ok(template)
}

pub async fn plan_split(
    retriever: &ExerciseRetriever,
    split_name: &str,
    exercise_type: &str,
    difficulty: &str,
) -> Result<SplitPlan> {
    let template = find_template(split_name).map_err(|e| {
        tracing::error!("❌ Error creating workout split: {}", e);
        e
    })?;

    tracing::info!(
        "📋 Building {} ({} training days)",
        template.name,
        template.training_days()
    );

    let mut plan = SplitPlan::new(template.name);
    for spec in &template.days {
        let day_plan = match spec.kind {
            DayKind::Rest => DayPlan::Rest,
            DayKind::Train(muscles) => {
                tracing::debug!("Day {}: {}", spec.day, muscles.join(", "));
                let workout = assemble_workout(retriever, muscles, exercise_type, difficulty)
                    .await
                    .map_err(|e| {
                        tracing::error!("❌ Error creating workout split: {}", e);
                        e
                    })?;
                DayPlan::Workout(workout)
            }
        };
        plan.push_day(spec.day, day_plan);
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticSource;
    use crate::core::retrieval::tests::RecordingSource;
    use crate::domain::model::REST_DAY;
    use std::sync::Arc;

    fn retriever(remote: Arc<RecordingSource>) -> ExerciseRetriever {
        ExerciseRetriever::new(remote).with_source("shoulders", Arc::new(StaticSource::shoulders()))
    }

    #[test]
    fn test_all_templates_are_well_formed() {
        assert_eq!(SPLIT_TEMPLATES.len(), 6);
        for template in SPLIT_TEMPLATES {
            template.validate().unwrap();
        }
    }

    #[test]
    fn test_split_names_in_declaration_order() {
        assert_eq!(
            split_names().collect::<Vec<_>>(),
            vec![
                "pplSplit",
                "arnoldSplit",
                "fullBodySplit",
                "upperLowerSplit",
                "fourDaySplit",
                "fiveDaySplit"
            ]
        );
    }

    #[test]
    fn test_misnumbered_template_is_rejected() {
        let mut template = SPLIT_TEMPLATES[0];
        template.days.swap(0, 1);
        assert!(matches!(
            template.validate(),
            Err(PlannerError::InvalidTemplateError { .. })
        ));
    }

    #[test]
    fn test_find_template_is_exact() {
        assert!(find_template("fiveDaySplit").is_ok());
        assert!(matches!(
            find_template("fivedaysplit"),
            Err(PlannerError::InvalidSplitError { .. })
        ));
    }

    #[tokio::test]
    async fn test_four_day_split_layout() {
        let remote = Arc::new(RecordingSource::new(5));
        let plan = plan_split(&retriever(remote.clone()), "fourDaySplit", "", "")
            .await
            .unwrap();

        assert_eq!(
            plan.labels().collect::<Vec<_>>(),
            vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"]
        );
        for rest_day in ["Day 3", "Day 6", "Day 7"] {
            assert!(plan.get(rest_day).unwrap().is_rest());
        }

        let day5 = plan.get("Day 5").unwrap().workout().unwrap();
        assert_eq!(day5.muscles().collect::<Vec<_>>(), vec!["shoulders"]);
        assert_eq!(day5.get("shoulders").unwrap().len(), 3);

        let day1 = plan.get("Day 1").unwrap().workout().unwrap();
        assert_eq!(day1.muscles().collect::<Vec<_>>(), vec!["lats", "middle_back", "biceps"]);
        assert_eq!(day1.get("lats").unwrap().len(), 3);

        assert_eq!(
            serde_json::to_value(&plan).unwrap()["Day 3"],
            serde_json::json!(REST_DAY)
        );
    }

    #[tokio::test]
    async fn test_days_run_in_order_and_skip_remote_for_shoulders() {
        let remote = Arc::new(RecordingSource::new(1));
        plan_split(&retriever(remote.clone()), "fiveDaySplit", "strength", "expert")
            .await
            .unwrap();

        assert_eq!(
            remote.requested_muscles(),
            vec![
                "chest",
                "lats",
                "middle_back",
                "traps",
                "quadriceps",
                "hamstrings",
                "glutes",
                "biceps",
                "triceps"
            ]
        );
        let calls = remote.calls.lock().unwrap();
        assert!(calls
            .iter()
            .all(|q| q.exercise_type.as_deref() == Some("strength")
                && q.difficulty.as_deref() == Some("expert")));
    }

    #[tokio::test]
    async fn test_unknown_split_fails_before_any_retrieval() {
        let remote = Arc::new(RecordingSource::new(1));
        let err = plan_split(&retriever(remote.clone()), "not_a_real_split", "", "")
            .await
            .unwrap_err();

        assert!(matches!(err, PlannerError::InvalidSplitError { ref name } if name == "not_a_real_split"));
        assert!(remote.requested_muscles().is_empty());
    }

    #[tokio::test]
    async fn test_failing_day_aborts_whole_split() {
        let remote = Arc::new(RecordingSource::failing_on("quadriceps"));
        let result = plan_split(&retriever(remote.clone()), "pplSplit", "", "").await;

        assert!(result.is_err());
        // day 3 fails on its first muscle, nothing after it runs
        assert_eq!(
            remote.requested_muscles().last().map(String::as_str),
            Some("quadriceps")
        );
        assert_eq!(remote.requested_muscles().len(), 6);
    }
}
