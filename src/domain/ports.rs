use crate::domain::model::{GhostRecords, SourceDocument};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Files under the storage root matching any of the extensions, grouped per
    /// extension in the given order.
    fn list_files(
        &self,
        extensions: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_folder(&self) -> &str;
    fn target_path(&self) -> &str;
    fn extensions(&self) -> &[String];
    fn author_id(&self) -> u64;
    fn language(&self) -> &str;
    fn max_title_length(&self) -> usize;
    fn pretty(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceDocument>>;
    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<GhostRecords>;
    async fn load(&self, records: GhostRecords) -> Result<String>;
}
