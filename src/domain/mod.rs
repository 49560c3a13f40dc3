// Domain layer - Sales records, datasets and aggregation
pub mod aggregation;
pub mod dashboard;
pub mod dataset;
pub mod record;
