// Quarter filtering and aggregation of sales records into summary cards and chart series
use crate::domain::record::SalesRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Sentinel quarter value meaning "no filter".
pub const ALL_QUARTERS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuarterSelection {
    #[default]
    All,
    Quarter(String),
}

impl QuarterSelection {
    pub fn new(value: &str) -> Self {
        if value == ALL_QUARTERS {
            QuarterSelection::All
        } else {
            QuarterSelection::Quarter(value.to_string())
        }
    }

    pub fn matches(&self, quarter: &str) -> bool {
        match self {
            QuarterSelection::All => true,
            QuarterSelection::Quarter(selected) => selected == quarter,
        }
    }
}

impl fmt::Display for QuarterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuarterSelection::All => f.write_str(ALL_QUARTERS),
            QuarterSelection::Quarter(quarter) => f.write_str(quarter),
        }
    }
}

/// Typed field selectors for one chart of one dataset kind.
pub struct FieldAccessors<R> {
    pub label: fn(&R) -> String,
    pub value: fn(&R) -> f64,
    pub count: fn(&R) -> f64,
}

impl<R: SalesRecord> FieldAccessors<R> {
    /// Group by the dimension field, sum ACV and count.
    pub fn by_dimension() -> Self {
        Self {
            label: |r: &R| r.dimension().to_string(),
            value: |r: &R| r.acv(),
            count: |r: &R| r.count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub count: f64,
    pub acv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Aggregate {
    pub summary: Summary,
    pub bar: Vec<SeriesPoint>,
}

/// Narrow `data` to the selected quarter. `All` borrows the input unchanged.
pub fn filter_by_quarter<'a, R: SalesRecord>(
    data: &'a [R],
    selection: &QuarterSelection,
) -> Cow<'a, [R]> {
    match selection {
        QuarterSelection::All => Cow::Borrowed(data),
        QuarterSelection::Quarter(_) => Cow::Owned(
            data.iter()
                .filter(|r| selection.matches(r.closed_fiscal_quarter()))
                .cloned()
                .collect(),
        ),
    }
}

/// Sum the summary card and build the label→value series in one pass.
pub fn aggregate<R>(data: &[R], accessors: &FieldAccessors<R>) -> Aggregate {
    let mut summary = Summary::default();
    let mut bar: Vec<SeriesPoint> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in data {
        let value = (accessors.value)(record);
        summary.count += (accessors.count)(record);
        summary.acv += value;

        let label = (accessors.label)(record);
        match positions.get(&label) {
            Some(&idx) => bar[idx].value += value,
            None => {
                positions.insert(label.clone(), bar.len());
                bar.push(SeriesPoint::new(label, value));
            }
        }
    }

    Aggregate { summary, bar }
}

/// Label→value series only, used for the doughnut.
pub fn series<R>(data: &[R], accessors: &FieldAccessors<R>) -> Vec<SeriesPoint> {
    aggregate(data, accessors).bar
}

/// Distinct quarters in ascending lexical order.
pub fn unique_quarters<'a, I>(quarters: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    quarters
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
