// Dashboard client - fetches the datasets, aggregates the selected view and prints it
use std::sync::Arc;

use quarterly_dashboard::application::dashboard_service::DashboardService;
use quarterly_dashboard::domain::aggregation::QuarterSelection;
use quarterly_dashboard::domain::dataset::DatasetKind;
use quarterly_dashboard::infrastructure::config::load_dashboard_config;
use quarterly_dashboard::infrastructure::http_repository::HttpDatasetRepository;
use quarterly_dashboard::init_tracing;
use quarterly_dashboard::presentation::chart_renderer::TextRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_dashboard_config()?;
    let settings = config.client;

    // Unknown views fall back to the default section, like an unmatched route
    let view = settings.view.parse::<DatasetKind>().unwrap_or_else(|e| {
        tracing::warn!("{}, showing {}", e, DatasetKind::CustomerType);
        DatasetKind::CustomerType
    });

    let repository = Arc::new(HttpDatasetRepository::new(settings.api_base_url));
    let service = DashboardService::new(repository);
    let state = service.load(QuarterSelection::new(&settings.quarter)).await;

    tracing::info!("Showing {} for quarter {}", view, state.quarter());

    let renderer = TextRenderer::new(settings.bar_width);
    let page = renderer.render_page(&state.section(view), state.quarter(), &state.quarter_options());
    println!("{}", page);

    Ok(())
}
