use clap::Parser;
use serde::Serialize;
use workout_planner::app::report;
use workout_planner::core::ConfigProvider;
use workout_planner::utils::error::ErrorSeverity;
use workout_planner::utils::{logger, validation::Validate};
use workout_planner::{CliConfig, Command, FitnessTracker, PlannerError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config.command);

    if config.api_key.is_none() {
        config.api_key = std::env::var("RAPIDAPI_KEY").ok().filter(|key| !key.is_empty());
    }

    // 載入配置：有 --config 時以 TOML 為主，命令列參數覆蓋
    let tracker = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut file_config = TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e));
            file_config.merge_cli(&config);
            build_tracker(&file_config)
        }
        None => build_tracker(&config),
    };

    if let Err(e) = run(&tracker, &config).await {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

fn build_tracker<C: ConfigProvider + Validate>(config: &C) -> FitnessTracker {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }
    if config.api_key().is_none() {
        tracing::warn!("⚠️ No API key configured; remote lookups will likely be rejected");
    }

    FitnessTracker::from_config(config).unwrap_or_else(|e| exit_with(&e))
}

async fn run(tracker: &FitnessTracker, config: &CliConfig) -> Result<(), PlannerError> {
    match &config.command {
        Command::Exercises {
            muscle,
            exercise_type,
            difficulty,
        } => {
            let exercises = tracker.retrieve(muscle, exercise_type, difficulty).await?;
            tracing::info!("Found {} exercises for '{}'", exercises.len(), muscle);
            if config.json {
                print_json(&ExercisesOutput {
                    exercises: &exercises,
                    recommendation: tracker.recommended_sets_reps(difficulty),
                    tip: tracker.exercise_tip(exercise_type),
                })?;
            } else {
                print!("{}", report::render_exercises(&exercises, exercise_type, difficulty));
            }
        }
        Command::Workout {
            muscles,
            exercise_type,
            difficulty,
        } => {
            let muscles = CliConfig::trimmed_muscles(muscles);
            let plan = tracker.build_workout(muscles.as_slice(), exercise_type, difficulty).await?;
            if config.json {
                print_json(&plan)?;
            } else {
                print!("{}", report::render_workout(&plan));
            }
        }
        Command::Split {
            name,
            exercise_type,
            difficulty,
        } => {
            let plan = tracker.build_split(name, exercise_type, difficulty).await?;
            if config.json {
                print_json(&plan)?;
            } else {
                print!("{}", report::render_split(&plan));
            }
        }
        Command::Splits => {
            let names = tracker.split_names();
            if config.json {
                print_json(&names)?;
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ExercisesOutput<'a> {
    exercises: &'a [workout_planner::ExerciseRecord],
    recommendation: workout_planner::SetsReps,
    tip: &'static str,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), PlannerError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_with(e: &PlannerError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
