use crate::domain::model::{ExerciseQuery, ExerciseRecord};
use crate::domain::ports::ExerciseSource;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Routes each muscle to the source registered for it, or to the fallback
/// (normally the remote exercise database).
#[derive(Clone)]
pub struct ExerciseRetriever {
    fallback: Arc<dyn ExerciseSource>,
    routes: HashMap<String, Arc<dyn ExerciseSource>>,
}

impl ExerciseRetriever {
    pub fn new(fallback: Arc<dyn ExerciseSource>) -> Self {
        Self {
            fallback,
            routes: HashMap::new(),
        }
    }

    /// Serves `muscle` from `source`, replacing any earlier registration.
    pub fn with_source(mut self, muscle: impl Into<String>, source: Arc<dyn ExerciseSource>) -> Self {
        self.register(muscle, source);
        self
    }

    pub fn register(&mut self, muscle: impl Into<String>, source: Arc<dyn ExerciseSource>) {
        let muscle = muscle.into();
        if self.routes.insert(muscle.clone(), source).is_some() {
            tracing::debug!("Replaced exercise source for '{}'", muscle);
        }
    }

    pub fn source_for(&self, muscle: &str) -> &dyn ExerciseSource {
        self.routes
            .get(muscle)
            .map(|source| source.as_ref())
            .unwrap_or_else(|| self.fallback.as_ref())
    }

    pub async fn retrieve(
        &self,
        muscle: &str,
        exercise_type: &str,
        difficulty: &str,
    ) -> Result<Vec<ExerciseRecord>> {
        let query = ExerciseQuery::new(muscle, exercise_type, difficulty);
        let source = self.source_for(muscle);
        tracing::debug!("Retrieving '{}' exercises from {} source", muscle, source.name());
        source.fetch(&query).await
    }
}
