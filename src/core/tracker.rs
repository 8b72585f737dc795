use crate::adapters::{RemoteSource, StaticSource};
use crate::core::advisory;
use crate::core::retrieval::ExerciseRetriever;
use crate::core::split;
use crate::core::workout::assemble_workout;
use crate::domain::model::{ExerciseRecord, SetsReps, SplitPlan, WorkoutPlan};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// Entry points used by the front end: exercise lookup, single workouts,
/// weekly splits and advice.
#[derive(Clone)]
pub struct FitnessTracker {
    retriever: ExerciseRetriever,
}

impl FitnessTracker {
    pub fn new(retriever: ExerciseRetriever) -> Self {
        Self { retriever }
    }

    /// Remote database as fallback, the built-in shoulder table, then any
    /// configured offline tables (which may replace the built-in one).
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let remote = RemoteSource::new(config.api_endpoint(), config.api_key())?;
        tracing::debug!("Remote exercise source: {}", remote.endpoint());

        let mut retriever = ExerciseRetriever::new(Arc::new(remote))
            .with_source("shoulders", Arc::new(StaticSource::shoulders()));

        for table in config.offline_tables() {
            let source = StaticSource::from_json_file(table.muscle.clone(), &table.path)?;
            tracing::info!("📁 Serving '{}' from {}", table.muscle, table.path);
            retriever.register(table.muscle.clone(), Arc::new(source));
        }

        Ok(Self::new(retriever))
    }

    pub fn retriever(&self) -> &ExerciseRetriever {
        &self.retriever
    }

    pub async fn retrieve(
        &self,
        muscle: &str,
        exercise_type: &str,
        difficulty: &str,
    ) -> Result<Vec<ExerciseRecord>> {
        self.retriever
            .retrieve(muscle, exercise_type, difficulty)
            .await
    }

    pub async fn build_workout<S: AsRef<str>>(
        &self,
        muscles: &[S],
        exercise_type: &str,
        difficulty: &str,
    ) -> Result<WorkoutPlan> {
        assemble_workout(&self.retriever, muscles, exercise_type, difficulty).await
    }

    pub async fn build_split(
        &self,
        split_name: &str,
        exercise_type: &str,
        difficulty: &str,
    ) -> Result<SplitPlan> {
        split::plan_split(&self.retriever, split_name, exercise_type, difficulty).await
    }

    pub fn recommended_sets_reps(&self, difficulty: &str) -> SetsReps {
        advisory::recommended_sets_reps(difficulty)
    }

    pub fn exercise_tip(&self, exercise_type: &str) -> &'static str {
        advisory::exercise_tip(exercise_type)
    }

    pub fn split_names(&self) -> Vec<&'static str> {
        split::split_names().collect()
    }
}
