use crate::domain::ports::Drill;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct DrillEngine<D: Drill> {
    drill: D,
    monitor: SystemMonitor,
}

impl<D: Drill> DrillEngine<D> {
    pub fn new(drill: D) -> Self {
        Self {
            drill,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(drill: D, monitor_enabled: bool) -> Self {
        Self {
            drill,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🏃 Starting drill: {}", self.drill.name());

        // Prepare
        tracing::info!("Preparing dataset...");
        let dataset = self.drill.prepare().await?;
        tracing::info!("Prepared {} input records", dataset.len());
        self.monitor.log_stats("Prepare");

        // Solve
        tracing::info!("Running variants...");
        let report = self.drill.solve(dataset).await?;
        tracing::info!(
            "Ran {} variants, consistent: {}",
            report.runs.len(),
            report.consistent
        );
        self.monitor.log_stats("Solve");

        // Publish
        tracing::info!("Publishing report...");
        let output_path = self.drill.publish(report).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_stats("Publish");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
