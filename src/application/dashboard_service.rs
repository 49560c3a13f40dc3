// Dashboard service - Fetches every dataset concurrently and folds arrivals into dashboard state
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::aggregation::QuarterSelection;
use crate::domain::dashboard::{DashboardEvent, DashboardState};
use crate::domain::dataset::{Dataset, DatasetKind};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DatasetRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    /// Spawn one retrieval per dataset kind. Each task sends exactly one
    /// `DatasetArrived` event, in whatever order they complete; the
    /// channel closes once all of them are done.
    pub fn fetch_all(&self) -> mpsc::Receiver<DashboardEvent> {
        let (tx, rx) = mpsc::channel(DatasetKind::ALL.len());

        for kind in DatasetKind::ALL {
            let tx = tx.clone();
            let repo = self.repository.clone();

            tokio::spawn(async move {
                let dataset = fetch_dataset(repo.as_ref(), kind).await;
                let _ = tx.send(DashboardEvent::DatasetArrived(dataset)).await;
            });
        }

        rx
    }

    /// Build the dashboard state for `quarter` once every retrieval has settled.
    pub async fn load(&self, quarter: QuarterSelection) -> DashboardState {
        let start_time = Instant::now();
        let mut state = DashboardState::new();
        state.apply(DashboardEvent::QuarterSelected(quarter));

        let mut rx = self.fetch_all();
        while let Some(event) = rx.recv().await {
            state.apply(event);
        }

        tracing::debug!(
            "Dashboard loaded in {} ms",
            start_time.elapsed().as_millis()
        );
        state
    }
}

/// Retrieve and decode one dataset. Any failure degrades to an empty dataset.
async fn fetch_dataset(repository: &dyn DatasetRepository, kind: DatasetKind) -> Dataset {
    let result = match repository.load(kind).await {
        Ok(value) => Dataset::from_json(kind, value).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(dataset) => {
            tracing::info!("Fetched {} dataset: {} records", kind, dataset.len());
            dataset
        }
        Err(e) => {
            tracing::warn!("Failed to fetch {} dataset, showing it empty: {:#}", kind, e);
            Dataset::empty(kind)
        }
    }
}
