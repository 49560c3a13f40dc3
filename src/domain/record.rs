// Sales record domain models, one typed shape per dataset kind
use crate::domain::aggregation::FieldAccessors;
use serde::{Deserialize, Deserializer, Serialize};

/// Numeric fields that are missing, null or non-numeric contribute 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).unwrap_or(0.0))
}

/// Text fields keep strings as-is, spell out numbers and booleans, and
/// read null (or anything else) as the empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Common view over the four record shapes.
pub trait SalesRecord: Clone {
    fn closed_fiscal_quarter(&self) -> &str;

    /// Value of the dataset's dimension field (customer type, team, ...)
    fn dimension(&self) -> &str;

    fn count(&self) -> f64;

    fn acv(&self) -> f64;

    /// Accessors used to build the summary card and bar series.
    fn bar_accessors() -> FieldAccessors<Self>;

    /// Accessors for the doughnut series, for kinds that render one.
    fn pie_accessors() -> Option<FieldAccessors<Self>> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTypeRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub closed_fiscal_quarter: String,
    #[serde(rename = "Cust_Type", default, deserialize_with = "lenient_string")]
    pub cust_type: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub acv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIndustryRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub closed_fiscal_quarter: String,
    #[serde(rename = "Acct_Industry", default, deserialize_with = "lenient_string")]
    pub acct_industry: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub acv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub closed_fiscal_quarter: String,
    #[serde(rename = "Team", default, deserialize_with = "lenient_string")]
    pub team: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub acv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcvRangeRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub closed_fiscal_quarter: String,
    #[serde(rename = "ACV_Range", default, deserialize_with = "lenient_string")]
    pub acv_range: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub acv: f64,
}

impl SalesRecord for CustomerTypeRecord {
    fn closed_fiscal_quarter(&self) -> &str {
        &self.closed_fiscal_quarter
    }

    fn dimension(&self) -> &str {
        &self.cust_type
    }

    fn count(&self) -> f64 {
        self.count
    }

    fn acv(&self) -> f64 {
        self.acv
    }

    // Bars are one per quarter/customer-type pair, e.g. "2023-Q3 (New Customer)"
    fn bar_accessors() -> FieldAccessors<Self> {
        FieldAccessors {
            label: |r: &Self| format!("{} ({})", r.closed_fiscal_quarter, r.cust_type),
            ..FieldAccessors::by_dimension()
        }
    }

    fn pie_accessors() -> Option<FieldAccessors<Self>> {
        Some(FieldAccessors::by_dimension())
    }
}

impl SalesRecord for AccountIndustryRecord {
    fn closed_fiscal_quarter(&self) -> &str {
        &self.closed_fiscal_quarter
    }

    fn dimension(&self) -> &str {
        &self.acct_industry
    }

    fn count(&self) -> f64 {
        self.count
    }

    fn acv(&self) -> f64 {
        self.acv
    }

    fn bar_accessors() -> FieldAccessors<Self> {
        FieldAccessors::by_dimension()
    }
}

impl SalesRecord for TeamRecord {
    fn closed_fiscal_quarter(&self) -> &str {
        &self.closed_fiscal_quarter
    }

    fn dimension(&self) -> &str {
        &self.team
    }

    fn count(&self) -> f64 {
        self.count
    }

    fn acv(&self) -> f64 {
        self.acv
    }

    fn bar_accessors() -> FieldAccessors<Self> {
        FieldAccessors::by_dimension()
    }
}

impl SalesRecord for AcvRangeRecord {
    fn closed_fiscal_quarter(&self) -> &str {
        &self.closed_fiscal_quarter
    }

    fn dimension(&self) -> &str {
        &self.acv_range
    }

    fn count(&self) -> f64 {
        self.count
    }

    fn acv(&self) -> f64 {
        self.acv
    }

    // ACV buckets chart the number of deals per bucket, not their value
    fn bar_accessors() -> FieldAccessors<Self> {
        FieldAccessors {
            value: |r: &Self| r.count,
            ..FieldAccessors::by_dimension()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_numbers_default_to_zero() {
        let json = r#"[
            {"closed_fiscal_quarter": "2023-Q3", "Team": "Asia Pac", "count": 4, "acv": 1200.5},
            {"closed_fiscal_quarter": "2023-Q3", "Team": "Europe", "acv": null},
            {"closed_fiscal_quarter": "2023-Q4", "Team": "Europe", "count": "seven", "acv": 10}
        ]"#;

        let records: Vec<TeamRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].count, 4.0);
        assert_eq!(records[0].acv, 1200.5);
        assert_eq!(records[1].count, 0.0);
        assert_eq!(records[1].acv, 0.0);
        assert_eq!(records[2].count, 0.0);
        assert_eq!(records[2].acv, 10.0);
    }

    #[test]
    fn test_null_and_numeric_text_fields() {
        let json = r#"[
            {"closed_fiscal_quarter": "Q1", "Team": null, "count": 1, "acv": 50},
            {"closed_fiscal_quarter": 20241, "Team": true, "count": 2, "acv": 75},
            {"Team": ["nested"], "count": 3, "acv": 5}
        ]"#;

        let records: Vec<TeamRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].team, "");
        assert_eq!(records[0].acv, 50.0);
        assert_eq!(records[1].closed_fiscal_quarter, "20241");
        assert_eq!(records[1].team, "true");
        assert_eq!(records[2].closed_fiscal_quarter, "");
        assert_eq!(records[2].team, "");
        assert_eq!(records[2].count, 3.0);
    }

    #[test]
    fn test_dimension_field_names() {
        let customer: CustomerTypeRecord = serde_json::from_str(
            r#"{"closed_fiscal_quarter": "2023-Q3", "Cust_Type": "Existing Customer", "count": 1, "acv": 2}"#,
        )
        .unwrap();
        assert_eq!(customer.dimension(), "Existing Customer");

        let industry: AccountIndustryRecord = serde_json::from_str(
            r#"{"closed_fiscal_quarter": "2023-Q3", "Acct_Industry": "Retail", "count": 1, "acv": 2}"#,
        )
        .unwrap();
        assert_eq!(industry.dimension(), "Retail");

        let range: AcvRangeRecord = serde_json::from_str(
            r#"{"closed_fiscal_quarter": "2023-Q3", "ACV_Range": "$20K - 50K", "count": 1, "acv": 2}"#,
        )
        .unwrap();
        assert_eq!(range.dimension(), "$20K - 50K");
    }

    #[test]
    fn test_customer_type_labels() {
        let record = CustomerTypeRecord {
            closed_fiscal_quarter: "2024-Q1".to_string(),
            cust_type: "New Customer".to_string(),
            count: 3.0,
            acv: 900.0,
        };

        let bar = CustomerTypeRecord::bar_accessors();
        assert_eq!((bar.label)(&record), "2024-Q1 (New Customer)");
        assert_eq!((bar.value)(&record), 900.0);

        let pie = CustomerTypeRecord::pie_accessors().unwrap();
        assert_eq!((pie.label)(&record), "New Customer");
    }

    #[test]
    fn test_acv_range_charts_deal_count() {
        let record = AcvRangeRecord {
            closed_fiscal_quarter: "2024-Q1".to_string(),
            acv_range: ">=$100K".to_string(),
            count: 6.0,
            acv: 750_000.0,
        };

        let bar = AcvRangeRecord::bar_accessors();
        assert_eq!((bar.value)(&record), 6.0);
        assert_eq!((bar.count)(&record), 6.0);
        assert!(AcvRangeRecord::pie_accessors().is_none());
    }
}
