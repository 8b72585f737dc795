use anyhow::Result;
use httpmock::prelude::*;
use workout_planner::core::ConfigProvider;
use workout_planner::utils::validation::Validate;
use workout_planner::{DayPlan, FitnessTracker, PlannerError, TomlConfig};

fn exercises_for(muscle: &str, count: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "name": format!("{} move {}", muscle, i),
                "type": "strength",
                "muscle": muscle,
                "equipment": "barbell",
                "difficulty": "intermediate",
                "instructions": "Keep it controlled."
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

fn tracker_for(server: &MockServer) -> Result<FitnessTracker> {
    let config = TomlConfig::from_toml_str(&format!(
        r#"
[source]
endpoint = "{}"
api_key = "test-key"
"#,
        server.url("/v1/exercises")
    ))?;
    config.validate()?;
    assert_eq!(config.api_key(), Some("test-key"));
    Ok(FitnessTracker::from_config(&config)?)
}

#[tokio::test]
async fn test_four_day_split_end_to_end() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/exercises")
            .header("x-rapidapi-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(exercises_for("generic", 5));
    });

    let tracker = tracker_for(&server)?;
    let plan = tracker.build_split("fourDaySplit", "", "").await?;

    // lats, middle_back, biceps, chest, triceps and four leg muscles; shoulders stay offline
    api_mock.assert_hits(9);

    assert_eq!(plan.len(), 7);
    assert!(plan.get("Day 3").unwrap().is_rest());
    assert!(plan.get("Day 6").unwrap().is_rest());
    assert!(plan.get("Day 7").unwrap().is_rest());

    let day2 = plan.get("Day 2").unwrap().workout().unwrap();
    assert_eq!(day2.muscles().collect::<Vec<_>>(), vec!["chest", "triceps"]);
    assert_eq!(day2.get("chest").unwrap().len(), 3);

    match plan.get("Day 5").unwrap() {
        DayPlan::Workout(workout) => {
            assert_eq!(workout.muscles().collect::<Vec<_>>(), vec!["shoulders"]);
            let names: Vec<&str> = workout
                .get("shoulders")
                .unwrap()
                .iter()
                .map(|r| r.name.as_str())
                .collect();
            assert_eq!(names, vec!["Overhead Press", "Lateral Raise", "Cable Lateral Raise"]);
        }
        DayPlan::Rest => panic!("Day 5 should be a training day"),
    }

    Ok(())
}

#[tokio::test]
async fn test_split_json_shape() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/exercises");
        then.status(200).json_body(exercises_for("generic", 1));
    });

    let tracker = tracker_for(&server)?;
    let plan = tracker.build_split("fiveDaySplit", "strength", "intermediate").await?;
    let json = serde_json::to_value(&plan)?;

    let days: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(days.len(), 7);
    assert_eq!(json["Day 6"], serde_json::json!("Rest day"));
    assert_eq!(json["Day 1"]["chest"][0]["type"], serde_json::json!("strength"));
    // the shoulder table has no strength/intermediate entry other than Lateral Raise
    assert_eq!(json["Day 3"]["shoulders"][0]["name"], serde_json::json!("Lateral Raise"));
    assert_eq!(json["Day 3"]["traps"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_invalid_split_issues_no_requests() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/exercises");
        then.status(200).json_body(serde_json::json!([]));
    });

    let tracker = tracker_for(&server)?;
    let err = tracker
        .build_split("not_a_real_split", "", "")
        .await
        .unwrap_err();

    api_mock.assert_hits(0);
    assert!(matches!(err, PlannerError::InvalidSplitError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_data_source_failure_aborts_split() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/exercises")
            .query_param("muscle", "chest");
        then.status(500);
    });

    let tracker = tracker_for(&server)?;
    let err = tracker.build_split("fiveDaySplit", "", "").await.unwrap_err();

    api_mock.assert_hits(1);
    assert!(err.is_data_source_error());
    Ok(())
}

#[tokio::test]
async fn test_workout_with_filters_hits_remote_once_per_muscle() -> Result<()> {
    let server = MockServer::start();
    let biceps_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/exercises")
            .query_param("muscle", "biceps")
            .query_param("type", "strength")
            .query_param("difficulty", "beginner");
        then.status(200).json_body(exercises_for("biceps", 2));
    });

    let tracker = tracker_for(&server)?;
    let plan = tracker
        .build_workout(&["biceps", "shoulders"], "strength", "beginner")
        .await?;

    biceps_mock.assert_hits(1);
    assert_eq!(plan.muscles().collect::<Vec<_>>(), vec!["biceps", "shoulders"]);
    assert_eq!(plan.get("biceps").unwrap().len(), 2);
    let shoulders = plan.get("shoulders").unwrap();
    assert_eq!(shoulders.len(), 1);
    assert_eq!(shoulders[0].name, "Cable Lateral Raise");
    Ok(())
}

#[tokio::test]
async fn test_remote_retrieve_returns_source_order() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/exercises").query_param("muscle", "glutes");
        then.status(200).json_body(exercises_for("glutes", 4));
    });

    let tracker = tracker_for(&server)?;
    let records = tracker.retrieve("glutes", "", "").await?;

    // plain retrieval is not capped
    assert_eq!(records.len(), 4);
    assert_eq!(records[3].name, "glutes move 4");
    Ok(())
}
