use algo_drills::utils::validation::Validate;
use algo_drills::{CliConfig, DrillEngine, LocalStorage, ProblemDrill};
use tempfile::TempDir;

fn cli_config(output_path: &str) -> CliConfig {
    CliConfig {
        problem: "two-sum".to_string(),
        variants: vec![],
        output_path: output_path.to_string(),
        dataset_file: None,
        range_start: -500,
        range_end: 500,
        range_step: 9,
        shuffle: true,
        target: 800,
        rounds: 10,
        seed: Some(42),
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_two_sum_drill() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(&output_path);
    assert!(config.validate().is_ok());

    let spec = config.drill_spec().unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let drill = ProblemDrill::new(storage, spec, config.seed, output_path.clone());

    let engine = DrillEngine::new_with_monitoring(drill, false);
    let result = engine.run().await.unwrap();
    assert!(result.ends_with("two-sum-drill_report.json"));

    // Verify the JSON report
    let report_path = std::path::Path::new(&output_path).join("two-sum-drill_report.json");
    assert!(report_path.exists());

    let parsed: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&report_path).unwrap()).unwrap();
    assert_eq!(parsed["problem"], "two-sum");
    assert_eq!(parsed["consistent"], true);

    let runs = parsed["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 5);
    for run in runs {
        assert_eq!(run["verified"], true, "variant {}", run["variant"]);
    }

    // Verify the CSV summary
    let csv_path = std::path::Path::new(&output_path).join("two-sum-drill_summary.csv");
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv_content.starts_with("drill,problem,variant,input_size,elapsed_ms,verified"));
    assert!(csv_content.contains("hash-map"));
    assert!(csv_content.contains("two-pointer"));
}

#[tokio::test]
async fn test_end_to_end_with_dataset_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let coins_path = temp_dir.path().join("coins.csv");
    std::fs::write(&coins_path, "1\n2\n3\n3\n").unwrap();

    let mut config = cli_config(&output_path);
    config.problem = "coin-change".to_string();
    config.dataset_file = Some(coins_path.to_str().unwrap().to_string());
    assert!(config.validate().is_ok());

    let spec = config.drill_spec().unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let drill = ProblemDrill::new(storage, spec, None, output_path.clone());

    let result = DrillEngine::new(drill).run().await.unwrap();
    assert!(result.ends_with("coin-change-drill_report.json"));

    let parsed: serde_json::Value = serde_json::from_slice(
        &std::fs::read(std::path::Path::new(&output_path).join("coin-change-drill_report.json"))
            .unwrap(),
    )
    .unwrap();

    let runs = parsed["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["answer"]["value"], 10);
    assert_eq!(runs[0]["verified"], true);
}

#[tokio::test]
async fn test_missing_dataset_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.problem = "coin-change".to_string();
    config.dataset_file = Some("no-such-file.csv".to_string());

    let spec = config.drill_spec().unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let drill = ProblemDrill::new(storage, spec, None, output_path);

    let err = DrillEngine::new(drill).run().await.unwrap_err();
    assert!(matches!(err, algo_drills::DrillError::IoError(_)));
    assert_eq!(
        err.severity(),
        algo_drills::utils::error::ErrorSeverity::Critical
    );
}

#[tokio::test]
async fn test_tournament_drill_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.problem = "tournament".to_string();
    config.rounds = 25;
    config.seed = Some(7);
    assert!(config.validate().is_ok());

    let spec = config.drill_spec().unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let drill = ProblemDrill::new(storage, spec, config.seed, output_path.clone());

    DrillEngine::new(drill).run().await.unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(
        &std::fs::read(std::path::Path::new(&output_path).join("tournament-drill_report.json"))
            .unwrap(),
    )
    .unwrap();

    assert_eq!(parsed["input_size"], 25);
    let runs = parsed["runs"].as_array().unwrap();
    assert_eq!(runs[0]["verified"], true);
    // 25 場比賽一定有冠軍
    assert!(runs[0]["answer"]["value"].is_string());
}
