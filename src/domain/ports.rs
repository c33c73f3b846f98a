use crate::domain::model::{Dataset, DrillReport, DrillSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
    fn drill_specs(&self) -> Result<Vec<DrillSpec>>;
}

/// 練習的三個階段：準備資料、逐變體執行、輸出報告
#[async_trait]
pub trait Drill: Send + Sync {
    fn name(&self) -> &str;
    async fn prepare(&self) -> Result<Dataset>;
    async fn solve(&self, dataset: Dataset) -> Result<DrillReport>;
    async fn publish(&self, report: DrillReport) -> Result<String>;
}
