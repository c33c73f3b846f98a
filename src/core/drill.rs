use crate::algos;
use crate::core::dataset;
use crate::domain::model::{Dataset, DrillReport, DrillSpec, InputSpec, Problem, VariantRun};
use crate::domain::ports::{Drill, Storage};
use crate::utils::error::{DrillError, Result};
use crate::utils::timing;
use async_trait::async_trait;

/// 一項練習的標準實作：建資料、跑變體、寫報告
pub struct ProblemDrill<S: Storage> {
    spec: DrillSpec,
    seed: Option<u64>,
    output_dir: String,
    storage: S,
}

impl<S: Storage> ProblemDrill<S> {
    pub fn new(storage: S, spec: DrillSpec, seed: Option<u64>, output_dir: impl Into<String>) -> Self {
        Self {
            spec,
            seed,
            output_dir: output_dir.into(),
            storage,
        }
    }

    pub fn spec(&self) -> &DrillSpec {
        &self.spec
    }

    async fn resolve_values(&self, input: &InputSpec) -> Result<Vec<i64>> {
        match input {
            InputSpec::File { path } => {
                tracing::debug!("Reading dataset file: {}", path);
                let bytes = self.storage.read_file(path).await?;
                dataset::values_from_csv_bytes(&bytes)
            }
            other => dataset::generate_values(other, self.seed),
        }
    }

    fn selected_variants(&self) -> Result<Vec<String>> {
        if self.spec.variants.is_empty() {
            return Ok(algos::variants(self.spec.problem)
                .iter()
                .map(|v| v.to_string())
                .collect());
        }

        for variant in &self.spec.variants {
            if !algos::is_registered(self.spec.problem, variant) {
                return Err(DrillError::UnknownVariantError {
                    problem: self.spec.problem.to_string(),
                    variant: variant.clone(),
                });
            }
        }
        Ok(self.spec.variants.clone())
    }
}

#[async_trait]
impl<S: Storage> Drill for ProblemDrill<S> {
    fn name(&self) -> &str {
        &self.spec.name
    }

    async fn prepare(&self) -> Result<Dataset> {
        match self.spec.problem {
            Problem::Tournament => {
                let rounds = match &self.spec.input {
                    InputSpec::Fixtures { rounds } => *rounds,
                    other => {
                        return Err(DrillError::DatasetError {
                            message: format!(
                                "Tournament drills need a fixtures input, got {:?}",
                                other
                            ),
                        })
                    }
                };
                Ok(Dataset::Season {
                    rounds: dataset::season_fixtures(rounds, self.seed),
                })
            }
            Problem::Subsequence => {
                let array = self.resolve_values(&self.spec.input).await?;
                let candidate = match &self.spec.candidate {
                    Some(spec) => self.resolve_values(spec).await?,
                    None => dataset::default_candidate(&array),
                };
                Ok(Dataset::SequencePair { array, candidate })
            }
            problem => {
                let values = self.resolve_values(&self.spec.input).await?;
                dataset::assemble_numbers(problem, values, self.spec.target)
            }
        }
    }

    async fn solve(&self, dataset: Dataset) -> Result<DrillReport> {
        let variants = self.selected_variants()?;
        let input_size = dataset.len();
        let mut runs: Vec<VariantRun> = Vec::with_capacity(variants.len());

        for variant in variants {
            let (answer, elapsed) =
                timing::time_run(|| algos::run_variant(self.spec.problem, &variant, &dataset));
            let answer = answer?;
            timing::log_elapsed(&format!("{}/{}", self.spec.name, variant), elapsed);

            let verified = algos::verify_answer(self.spec.problem, &dataset, &answer);
            if !verified {
                tracing::warn!("⚠️  Variant '{}' failed verification", variant);
            }

            runs.push(VariantRun {
                variant,
                answer,
                elapsed,
                verified,
            });
        }

        // 所有變體必須對答案的存在性達成一致
        let consistent = match runs.split_first() {
            Some((first, rest)) => rest.iter().all(|run| run.answer.agrees_with(&first.answer)),
            None => true,
        };
        if !consistent {
            tracing::warn!("⚠️  Variants of '{}' disagree", self.spec.name);
        }

        Ok(DrillReport {
            drill_name: self.spec.name.clone(),
            problem: self.spec.problem,
            input_size,
            runs,
            consistent,
        })
    }

    async fn publish(&self, report: DrillReport) -> Result<String> {
        let json_name = format!("{}_report.json", report.drill_name);
        let csv_name = format!("{}_summary.csv", report.drill_name);

        let report_json = serde_json::json!({
            "drill": report.drill_name,
            "problem": report.problem.as_str(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "input_size": report.input_size,
            "consistent": report.consistent,
            "runs": report.runs.iter().map(|run| serde_json::json!({
                "variant": run.variant,
                "elapsed_ms": timing::as_millis(run.elapsed),
                "verified": run.verified,
                "answer": run.answer,
            })).collect::<Vec<_>>(),
        });

        let json_data = serde_json::to_vec_pretty(&report_json)?;
        self.storage.write_file(&json_name, &json_data).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "drill",
            "problem",
            "variant",
            "input_size",
            "elapsed_ms",
            "verified",
        ])?;
        for run in &report.runs {
            writer.write_record(&[
                report.drill_name.clone(),
                report.problem.to_string(),
                run.variant.clone(),
                report.input_size.to_string(),
                format!("{:.3}", timing::as_millis(run.elapsed)),
                run.verified.to_string(),
            ])?;
        }
        let csv_data = writer
            .into_inner()
            .map_err(|e| DrillError::ProcessingError {
                message: format!("Failed to finish CSV summary: {}", e),
            })?;
        self.storage.write_file(&csv_name, &csv_data).await?;

        tracing::debug!("Report written: {} + {}", json_name, csv_name);
        Ok(format!("{}/{}", self.output_dir, json_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self::default()
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DrillError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn two_sum_spec() -> DrillSpec {
        DrillSpec {
            name: "two-sum-drill".to_string(),
            problem: Problem::TwoSum,
            variants: vec![],
            input: InputSpec::Inline {
                values: vec![-1, -2, -5, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            },
            candidate: None,
            target: Some(10),
        }
    }

    #[tokio::test]
    async fn test_two_sum_drill_runs_every_variant_consistently() {
        let drill = ProblemDrill::new(MockStorage::new(), two_sum_spec(), Some(1), "./output");

        let dataset = drill.prepare().await.unwrap();
        let report = drill.solve(dataset).await.unwrap();

        assert_eq!(report.runs.len(), algos::variants(Problem::TwoSum).len());
        assert!(report.consistent);
        assert!(report.runs.iter().all(|run| run.verified));
    }

    #[tokio::test]
    async fn test_publish_writes_json_and_csv() {
        let storage = MockStorage::new();
        let drill = ProblemDrill::new(storage.clone(), two_sum_spec(), None, "./output");

        let dataset = drill.prepare().await.unwrap();
        let report = drill.solve(dataset).await.unwrap();
        let path = drill.publish(report).await.unwrap();

        assert_eq!(path, "./output/two-sum-drill_report.json");

        let json_bytes = storage.get_file("two-sum-drill_report.json").await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json_bytes).unwrap();
        assert_eq!(parsed["problem"], "two-sum");
        assert_eq!(parsed["consistent"], true);
        assert!(parsed["runs"].as_array().unwrap().len() >= 4);

        let csv_bytes = storage.get_file("two-sum-drill_summary.csv").await.unwrap();
        let csv_text = String::from_utf8(csv_bytes).unwrap();
        assert!(csv_text.starts_with("drill,problem,variant,input_size,elapsed_ms,verified"));
        assert!(csv_text.contains("hash-map"));
    }

    #[tokio::test]
    async fn test_file_input_goes_through_storage() {
        let storage = MockStorage::new();
        storage.put_file("coins.csv", b"1\n2\n3\n3\n").await;

        let spec = DrillSpec {
            name: "coin-drill".to_string(),
            problem: Problem::CoinChange,
            variants: vec![],
            input: InputSpec::File {
                path: "coins.csv".to_string(),
            },
            candidate: None,
            target: None,
        };

        let drill = ProblemDrill::new(storage, spec, None, "./output");
        let dataset = drill.prepare().await.unwrap();
        let report = drill.solve(dataset).await.unwrap();

        assert_eq!(report.runs.len(), 1);
        assert_eq!(
            report.runs[0].answer,
            crate::domain::model::Answer::Amount(10)
        );
        assert!(report.runs[0].verified);
    }

    #[tokio::test]
    async fn test_unknown_variant_fails_solve() {
        let mut spec = two_sum_spec();
        spec.variants = vec!["quantum".to_string()];
        let drill = ProblemDrill::new(MockStorage::new(), spec, None, "./output");

        let dataset = drill.prepare().await.unwrap();
        let err = drill.solve(dataset).await.unwrap_err();
        assert!(matches!(err, DrillError::UnknownVariantError { .. }));
    }

    #[tokio::test]
    async fn test_subsequence_default_candidate_holds() {
        let spec = DrillSpec {
            name: "subseq-drill".to_string(),
            problem: Problem::Subsequence,
            variants: vec![],
            input: InputSpec::Range {
                start: 0,
                end: 100,
                step: 1,
                shuffle: false,
            },
            candidate: None,
            target: None,
        };

        let drill = ProblemDrill::new(MockStorage::new(), spec, None, "./output");
        let dataset = drill.prepare().await.unwrap();
        let report = drill.solve(dataset).await.unwrap();

        assert!(report.consistent);
        for run in &report.runs {
            assert_eq!(run.answer, crate::domain::model::Answer::Truth(true));
        }
    }
}
