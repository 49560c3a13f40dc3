// Repository trait for dataset retrieval
use crate::domain::dataset::DatasetKind;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the full, unfiltered dataset for `kind` as opaque JSON.
    /// Fails as a whole; there are no partial datasets.
    async fn load(&self, kind: DatasetKind) -> anyhow::Result<serde_json::Value>;
}
