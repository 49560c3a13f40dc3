// HTTP dataset repository - client side of the dataset API
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::DatasetKind;
use crate::infrastructure::config::dataset_url;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDatasetRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDatasetRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn load(&self, kind: DatasetKind) -> Result<serde_json::Value> {
        let url = dataset_url(&self.base_url, kind.slug());
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} failed with status {}: {}", url, status, body);
        }

        response
            .json::<serde_json::Value>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}
