use crate::core::retrieval::ExerciseRetriever;
use crate::domain::model::{WorkoutPlan, MAX_EXERCISES_PER_MUSCLE};
use crate::utils::error::Result;

/// Builds a workout for `muscles` in order, keeping the first
/// [`MAX_EXERCISES_PER_MUSCLE`] exercises returned for each. A failed lookup
/// aborts the whole workout.
pub async fn assemble_workout<S: AsRef<str>>(
    retriever: &ExerciseRetriever,
    muscles: &[S],
    exercise_type: &str,
    difficulty: &str,
) -> Result<WorkoutPlan> {
    let mut plan = WorkoutPlan::new();

    for muscle in muscles {
        let muscle = muscle.as_ref();
        let exercises = retriever
            .retrieve(muscle, exercise_type, difficulty)
            .await
            .map_err(|e| {
                tracing::error!("❌ Error creating workout: {}", e);
                e
            })?;

        if exercises.len() > MAX_EXERCISES_PER_MUSCLE {
            tracing::debug!(
                "Keeping {} of {} exercises for '{}'",
                MAX_EXERCISES_PER_MUSCLE,
                exercises.len(),
                muscle
            );
        }
        plan.insert(muscle, exercises);
    }

    Ok(plan)
}
