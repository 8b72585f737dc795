pub mod advisory;
pub mod retrieval;
pub mod split;
pub mod tracker;
pub mod workout;

pub use crate::domain::model::{
    DayPlan, ExerciseQuery, ExerciseRecord, Reps, SetsReps, SplitPlan, WorkoutPlan,
};
pub use crate::domain::ports::{ConfigProvider, ExerciseSource, OfflineTable};
pub use crate::utils::error::Result;
