use crate::domain::model::DrillReport;
use crate::domain::ports::Drill;
use crate::utils::error::Result;
use crate::utils::timing;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 單項練習在套餐中的執行結果
pub struct DrillRunResult {
    pub drill_name: String,
    pub output_path: String,
    pub duration: Duration,
    pub report: DrillReport,
}

/// 依序執行多項練習
pub struct DrillSuite {
    name: String,
    drills: Vec<Box<dyn Drill>>,
}

impl DrillSuite {
    pub fn new(name: String) -> Self {
        Self {
            name,
            drills: Vec::new(),
        }
    }

    pub fn add_drill(&mut self, drill: Box<dyn Drill>) {
        self.drills.push(drill);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.drills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drills.is_empty()
    }

    pub async fn execute_all(&self) -> Result<Vec<DrillRunResult>> {
        let mut results = Vec::with_capacity(self.drills.len());

        tracing::info!("📋 Suite '{}': {} drills", self.name, self.drills.len());

        for drill in &self.drills {
            let started = Instant::now();

            let dataset = drill.prepare().await?;
            let report = drill.solve(dataset).await?;
            let output_path = drill.publish(report.clone()).await?;

            let duration = started.elapsed();
            tracing::info!(
                "✅ Drill '{}' finished in {:.3} ms",
                drill.name(),
                timing::as_millis(duration)
            );

            results.push(DrillRunResult {
                drill_name: drill.name().to_string(),
                output_path,
                duration,
                report,
            });
        }

        Ok(results)
    }

    pub fn execution_summary(results: &[DrillRunResult]) -> HashMap<String, serde_json::Value> {
        let mut summary = HashMap::new();

        summary.insert(
            "suite_drills".to_string(),
            serde_json::Value::Number(results.len().into()),
        );

        let total_runs: usize = results.iter().map(|r| r.report.runs.len()).sum();
        summary.insert(
            "total_variant_runs".to_string(),
            serde_json::Value::Number(total_runs.into()),
        );

        let total_ms: u64 = results.iter().map(|r| r.duration.as_millis() as u64).sum();
        summary.insert(
            "total_duration_ms".to_string(),
            serde_json::Value::Number(total_ms.into()),
        );

        let all_consistent = results.iter().all(|r| r.report.consistent);
        summary.insert(
            "all_consistent".to_string(),
            serde_json::Value::Bool(all_consistent),
        );

        let all_verified = results
            .iter()
            .all(|r| r.report.runs.iter().all(|run| run.verified));
        summary.insert(
            "all_verified".to_string(),
            serde_json::Value::Bool(all_verified),
        );

        let executed: Vec<serde_json::Value> = results
            .iter()
            .map(|r| serde_json::Value::String(r.drill_name.clone()))
            .collect();
        summary.insert(
            "executed_drills".to_string(),
            serde_json::Value::Array(executed),
        );

        summary
    }
}
