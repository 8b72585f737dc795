pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{RemoteSource, StaticSource, DEFAULT_ENDPOINT};
pub use core::{retrieval::ExerciseRetriever, tracker::FitnessTracker};
pub use domain::model::{DayPlan, ExerciseRecord, Reps, SetsReps, SplitPlan, WorkoutPlan};
pub use utils::error::{PlannerError, Result};
