// Dataset kinds and their typed payloads
use crate::domain::record::{
    AccountIndustryRecord, AcvRangeRecord, CustomerTypeRecord, SalesRecord, TeamRecord,
};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unknown dataset: {0}")]
    UnknownKind(String),

    #[error("malformed {kind} dataset: {source}")]
    Malformed {
        kind: DatasetKind,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    CustomerType,
    AccountIndustry,
    Team,
    AcvRange,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::CustomerType,
        DatasetKind::AccountIndustry,
        DatasetKind::Team,
        DatasetKind::AcvRange,
    ];

    /// URL path segment under `/api`
    pub fn slug(self) -> &'static str {
        match self {
            DatasetKind::CustomerType => "customer-type",
            DatasetKind::AccountIndustry => "account-industry",
            DatasetKind::Team => "team",
            DatasetKind::AcvRange => "acv-range",
        }
    }

    /// Backing file name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::CustomerType => "customerType.json",
            DatasetKind::AccountIndustry => "accountIndustry.json",
            DatasetKind::Team => "team.json",
            DatasetKind::AcvRange => "acvRange.json",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DatasetKind::CustomerType => "Customer Type",
            DatasetKind::AccountIndustry => "Account Industry",
            DatasetKind::Team => "Team",
            DatasetKind::AcvRange => "ACV Range",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| DatasetError::UnknownKind(s.to_string()))
    }
}

/// A fetched dataset with its kind-specific record shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    CustomerType(Vec<CustomerTypeRecord>),
    AccountIndustry(Vec<AccountIndustryRecord>),
    Team(Vec<TeamRecord>),
    AcvRange(Vec<AcvRangeRecord>),
}

impl Dataset {
    pub fn empty(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::CustomerType => Dataset::CustomerType(Vec::new()),
            DatasetKind::AccountIndustry => Dataset::AccountIndustry(Vec::new()),
            DatasetKind::Team => Dataset::Team(Vec::new()),
            DatasetKind::AcvRange => Dataset::AcvRange(Vec::new()),
        }
    }

    /// Decode the opaque JSON served for `kind` into typed records.
    /// Only a non-array payload is malformed; rows that are not objects
    /// are skipped and the rest still decode.
    pub fn from_json(kind: DatasetKind, value: serde_json::Value) -> Result<Self, DatasetError> {
        let rows: Vec<serde_json::Value> = serde_json::from_value(value)
            .map_err(|source| DatasetError::Malformed { kind, source })?;

        Ok(match kind {
            DatasetKind::CustomerType => Dataset::CustomerType(decode_rows(kind, rows)),
            DatasetKind::AccountIndustry => Dataset::AccountIndustry(decode_rows(kind, rows)),
            DatasetKind::Team => Dataset::Team(decode_rows(kind, rows)),
            DatasetKind::AcvRange => Dataset::AcvRange(decode_rows(kind, rows)),
        })
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::CustomerType(_) => DatasetKind::CustomerType,
            Dataset::AccountIndustry(_) => DatasetKind::AccountIndustry,
            Dataset::Team(_) => DatasetKind::Team,
            Dataset::AcvRange(_) => DatasetKind::AcvRange,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::CustomerType(records) => records.len(),
            Dataset::AccountIndustry(records) => records.len(),
            Dataset::Team(records) => records.len(),
            Dataset::AcvRange(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fiscal quarters of every record, in dataset order (may repeat).
    pub fn quarters(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        fn of<R: SalesRecord>(records: &[R]) -> Box<dyn Iterator<Item = &str> + '_> {
            Box::new(records.iter().map(|r| r.closed_fiscal_quarter()))
        }

        match self {
            Dataset::CustomerType(records) => of(records),
            Dataset::AccountIndustry(records) => of(records),
            Dataset::Team(records) => of(records),
            Dataset::AcvRange(records) => of(records),
        }
    }
}

fn decode_rows<R: DeserializeOwned>(kind: DatasetKind, rows: Vec<serde_json::Value>) -> Vec<R> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Skipping {} row {}: {}", kind, idx, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.slug().parse::<DatasetKind>().unwrap(), kind);
        }
        assert!(matches!(
            "pipeline".parse::<DatasetKind>(),
            Err(DatasetError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_from_json_typed_records() {
        let value = json!([
            {"closed_fiscal_quarter": "2023-Q3", "ACV_Range": "<$20K", "count": 12, "acv": 140000},
            {"closed_fiscal_quarter": "2023-Q4", "ACV_Range": "$20K - 50K", "count": 5, "acv": 165000}
        ]);

        let dataset = Dataset::from_json(DatasetKind::AcvRange, value).unwrap();

        assert_eq!(dataset.kind(), DatasetKind::AcvRange);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.quarters().collect::<Vec<_>>(), vec!["2023-Q3", "2023-Q4"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Dataset::from_json(DatasetKind::Team, json!({"Team": "Europe"})).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { kind: DatasetKind::Team, .. }));
    }

    #[test]
    fn test_bad_rows_do_not_drop_the_dataset() {
        let value = json!([
            {"closed_fiscal_quarter": "Q1", "Team": "Alpha", "count": 2, "acv": 100},
            {"closed_fiscal_quarter": "Q1", "Team": null, "count": 1, "acv": 50},
            {"closed_fiscal_quarter": 20241, "Team": "Gamma", "count": 4, "acv": 10},
            null,
            7,
            {"closed_fiscal_quarter": "Q2", "Team": "Alpha", "count": 3, "acv": 200}
        ]);

        let dataset = Dataset::from_json(DatasetKind::Team, value).unwrap();

        let Dataset::Team(records) = dataset else {
            panic!("expected team records");
        };
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].team, "");
        assert_eq!(records[2].closed_fiscal_quarter, "20241");
        assert_eq!(records.iter().map(|r| r.count).sum::<f64>(), 10.0);
        assert_eq!(records.iter().map(|r| r.acv).sum::<f64>(), 360.0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty(DatasetKind::CustomerType);
        assert!(dataset.is_empty());
        assert_eq!(dataset.kind(), DatasetKind::CustomerType);
    }
}
