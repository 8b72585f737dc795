use crate::domain::model::{ExerciseQuery, ExerciseRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Anything that can answer an exercise lookup: the remote exercise
/// database or an offline table.
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn offline_tables(&self) -> &[OfflineTable];
}

/// A JSON file of exercise records served locally for one muscle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineTable {
    pub muscle: String,
    pub path: String,
}

impl std::str::FromStr for OfflineTable {
    type Err = String;

    /// Parses `muscle=path`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (muscle, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected MUSCLE=PATH, got '{}'", s))?;
        let (muscle, path) = (muscle.trim(), path.trim());
        if muscle.is_empty() || path.is_empty() {
            return Err(format!("expected MUSCLE=PATH, got '{}'", s));
        }
        Ok(Self {
            muscle: muscle.to_string(),
            path: path.to_string(),
        })
    }
}
