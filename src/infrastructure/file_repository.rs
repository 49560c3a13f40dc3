// File-backed dataset repository
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::DatasetKind;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads `<data_dir>/<kind file>` on every request, so edits to the
/// files show up without a restart.
#[derive(Debug, Clone)]
pub struct FileDatasetRepository {
    data_dir: PathBuf,
}

impl FileDatasetRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn dataset_path(&self, kind: DatasetKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

#[async_trait]
impl DatasetRepository for FileDatasetRepository {
    async fn load(&self, kind: DatasetKind) -> Result<serde_json::Value> {
        let path = self.dataset_path(kind);
        tracing::debug!("Reading {} dataset from {}", kind, path.display());

        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_reads_kind_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("acvRange.json"),
            r#"[{"closed_fiscal_quarter": "2023-Q3", "ACV_Range": "<$20K", "count": 12, "acv": 140000}]"#,
        )
        .unwrap();
        let repo = FileDatasetRepository::new(dir.path());

        let value = repo.load(DatasetKind::AcvRange).await.unwrap();

        assert_eq!(
            value,
            json!([{"closed_fiscal_quarter": "2023-Q3", "ACV_Range": "<$20K", "count": 12, "acv": 140000}])
        );
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileDatasetRepository::new(dir.path());

        let err = repo.load(DatasetKind::Team).await.unwrap_err();
        assert!(err.to_string().contains("team.json"));
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("customerType.json"), "[{\"Cust_Type\": ").unwrap();
        let repo = FileDatasetRepository::new(dir.path());

        let err = repo.load(DatasetKind::CustomerType).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
