use crate::adapters::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, OfflineTable};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "workout-planner")]
#[command(about = "Plan workouts and weekly splits from an exercise database")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Exercise database endpoint [default: API Ninjas on RapidAPI]")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "RapidAPI key (falls back to $RAPIDAPI_KEY)")]
    pub api_key: Option<String>,

    /// Serve a muscle from a local JSON file instead of the exercise database
    #[arg(long = "offline-table", value_name = "MUSCLE=PATH")]
    pub offline_tables: Vec<OfflineTable>,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List exercises for one muscle, with sets/reps and a tip
    Exercises {
        #[arg(long)]
        muscle: String,
        #[arg(long = "type", default_value = "")]
        exercise_type: String,
        #[arg(long, default_value = "")]
        difficulty: String,
    },
    /// Build a single workout for a comma-separated list of muscles
    Workout {
        #[arg(long, value_delimiter = ',', required = true)]
        muscles: Vec<String>,
        #[arg(long = "type", default_value = "")]
        exercise_type: String,
        #[arg(long, default_value = "")]
        difficulty: String,
    },
    /// Expand a named weekly split into a 7-day plan
    Split {
        #[arg(long)]
        name: String,
        #[arg(long = "type", default_value = "")]
        exercise_type: String,
        #[arg(long, default_value = "")]
        difficulty: String,
    },
    /// List the available split names
    Splits,
}

impl CliConfig {
    /// Muscles as typed, trimmed of surrounding whitespace.
    pub fn trimmed_muscles(raw: &[String]) -> Vec<String> {
        raw.iter().map(|muscle| muscle.trim().to_string()).collect()
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn offline_tables(&self) -> &[OfflineTable] {
        &self.offline_tables
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", self.api_endpoint())?;
        super::validate_offline_tables("offline_table", &self.offline_tables)?;
        Ok(())
    }
}
