use crate::model::FetchError;
use serde_json::Value;

/// Source of raw election records for one run.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Value>, FetchError>;
}
