use crate::domain::model::ArtworkRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of random artwork batches. The production implementation talks to
/// the Harvard image API; tests script batches in memory.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_batch(&self) -> Result<Vec<ArtworkRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn batch_size(&self) -> usize;
    fn max_attempts(&self) -> usize;
}
