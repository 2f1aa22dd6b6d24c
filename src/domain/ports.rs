use crate::domain::model::{Dataset, Job, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What the generator needs to know about a run.
pub trait ConfigProvider: Send + Sync {
    fn seed(&self) -> u64;
    fn days(&self) -> u32;
    fn orgs(&self) -> &[String];
    fn jobs_for(&self, department: &str) -> &[Job];
    fn employees_per_org(&self) -> usize;
    /// `None` means "today (UTC) minus `days`".
    fn start_date(&self) -> Option<NaiveDate>;
    fn output_path(&self) -> &str;
    fn zip_filename(&self) -> Option<&str>;
    fn write_summary(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, data: Dataset) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
