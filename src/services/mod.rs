//! Services for the dataset, aggregation and queries

pub mod aggregator;
pub mod dataset;
pub mod normalizer;
pub mod projection;
pub mod query;

pub use aggregator::Aggregator;
pub use dataset::DatasetStore;
pub use normalizer::normalize_country;
pub use projection::{project_for_metric, project_for_metric_key};
pub use query::QueryService;
