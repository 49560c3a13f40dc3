// Dashboard state and section view models
use super::aggregation::{
    aggregate, filter_by_quarter, series, unique_quarters, QuarterSelection, SeriesPoint, Summary,
};
use super::dataset::{Dataset, DatasetKind};
use super::record::SalesRecord;

/// Something that changes what the dashboard shows.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    QuarterSelected(QuarterSelection),
    DatasetArrived(Dataset),
}

/// One rendered section: summary card, bar chart and optional doughnut.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub kind: DatasetKind,
    pub title: String,
    pub summary: Summary,
    pub bar: Vec<SeriesPoint>,
    pub pie: Option<Vec<SeriesPoint>>,
}

impl SectionView {
    pub fn card_title(&self) -> String {
        format!("{} Summary", self.title)
    }
}

/// Quarter selection plus the four datasets. Datasets that have not
/// arrived yet are empty.
#[derive(Debug, Clone)]
pub struct DashboardState {
    quarter: QuarterSelection,
    customer_type: Dataset,
    account_industry: Dataset,
    team: Dataset,
    acv_range: Dataset,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            quarter: QuarterSelection::All,
            customer_type: Dataset::empty(DatasetKind::CustomerType),
            account_industry: Dataset::empty(DatasetKind::AccountIndustry),
            team: Dataset::empty(DatasetKind::Team),
            acv_range: Dataset::empty(DatasetKind::AcvRange),
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::QuarterSelected(quarter) => self.quarter = quarter,
            DashboardEvent::DatasetArrived(dataset) => {
                let slot = self.slot_mut(dataset.kind());
                *slot = dataset;
            }
        }
    }

    pub fn quarter(&self) -> &QuarterSelection {
        &self.quarter
    }

    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::CustomerType => &self.customer_type,
            DatasetKind::AccountIndustry => &self.account_industry,
            DatasetKind::Team => &self.team,
            DatasetKind::AcvRange => &self.acv_range,
        }
    }

    fn slot_mut(&mut self, kind: DatasetKind) -> &mut Dataset {
        match kind {
            DatasetKind::CustomerType => &mut self.customer_type,
            DatasetKind::AccountIndustry => &mut self.account_industry,
            DatasetKind::Team => &mut self.team,
            DatasetKind::AcvRange => &mut self.acv_range,
        }
    }

    /// Quarters offered by the selector, across all unfiltered datasets.
    /// "All" is not included.
    pub fn quarter_options(&self) -> Vec<String> {
        unique_quarters(
            DatasetKind::ALL
                .into_iter()
                .flat_map(|kind| self.dataset(kind).quarters()),
        )
    }

    /// Build the section for `kind` under the current quarter selection.
    pub fn section(&self, kind: DatasetKind) -> SectionView {
        match self.dataset(kind) {
            Dataset::CustomerType(records) => self.build_section(kind, records),
            Dataset::AccountIndustry(records) => self.build_section(kind, records),
            Dataset::Team(records) => self.build_section(kind, records),
            Dataset::AcvRange(records) => self.build_section(kind, records),
        }
    }

    fn build_section<R: SalesRecord>(&self, kind: DatasetKind, records: &[R]) -> SectionView {
        let filtered = filter_by_quarter(records, &self.quarter);
        let result = aggregate(&*filtered, &R::bar_accessors());
        let pie = R::pie_accessors().map(|accessors| series(&*filtered, &accessors));

        SectionView {
            kind,
            title: kind.title().to_string(),
            summary: result.summary,
            bar: result.bar,
            pie,
        }
    }
}
