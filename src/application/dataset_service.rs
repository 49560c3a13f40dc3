// Dataset service - Use case for serving raw datasets
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::DatasetKind;
use std::sync::Arc;

#[derive(Clone)]
pub struct DatasetService {
    repository: Arc<dyn DatasetRepository>,
}

impl DatasetService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_dataset(&self, kind: DatasetKind) -> anyhow::Result<serde_json::Value> {
        let value = self.repository.load(kind).await?;
        tracing::debug!(
            "Loaded {} dataset ({} records)",
            kind,
            value.as_array().map(|rows| rows.len()).unwrap_or(0)
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedRepository(serde_json::Value);

    #[async_trait]
    impl DatasetRepository for FixedRepository {
        async fn load(&self, _kind: DatasetKind) -> anyhow::Result<serde_json::Value> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_get_dataset_passes_array_through() {
        let body = json!([{"closed_fiscal_quarter": "2023-Q3", "Team": "Europe", "count": 1, "acv": 10}]);
        let service = DatasetService::new(Arc::new(FixedRepository(body.clone())));

        assert_eq!(service.get_dataset(DatasetKind::Team).await.unwrap(), body);
    }

    struct FailingRepository;

    #[async_trait]
    impl DatasetRepository for FailingRepository {
        async fn load(&self, kind: DatasetKind) -> anyhow::Result<serde_json::Value> {
            anyhow::bail!("{} is unavailable", kind)
        }
    }

    #[tokio::test]
    async fn test_get_dataset_propagates_failure() {
        let service = DatasetService::new(Arc::new(FailingRepository));

        let err = service.get_dataset(DatasetKind::AcvRange).await.unwrap_err();
        assert_eq!(err.to_string(), "acv-range is unavailable");
    }
}
