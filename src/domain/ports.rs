use crate::domain::model::{FeedRecord, LoadReport, OpmlDocument};
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
    fn source_url(&self) -> &str;
    fn country_filter(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FeedRecord>>;
    async fn transform(&self, records: Vec<FeedRecord>) -> Result<OpmlDocument>;
    async fn load(&self, document: OpmlDocument) -> Result<LoadReport>;
}
