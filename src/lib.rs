//! Turns a cleaned multi-station air-quality time series into supervised-learning
//! datasets for pollutant forecasting, and splits them chronologically.
//!
//! [`FeatureBuilder`] derives per-station lag, rolling-mean and next-hour target
//! columns (optionally with weather covariates), drops warm-up rows and either
//! keeps per-station rows or averages across stations. [`split()`] then cuts the
//! result into train, validation and test slices by timestamp.

mod error;
mod features;
mod source;
mod split;
#[cfg(test)]
mod test_fixtures;
mod types;

pub use error::AirQualityError;

pub use features::builder::{build_features, FeatureBuilder};
pub use features::dataset::{FeatureDataset, Granularity};
pub use features::error::FeatureError;
pub use features::params::FeatureParams;

pub use source::csv_source::{CsvSource, DEFAULT_SOURCE_PATH};
pub use source::error::SourceError;
pub use source::in_memory::InMemorySource;
pub use source::ObservationSource;

pub use split::error::SplitError;
pub use split::report::{SplitName, SplitReport, SplitSummary};
pub use split::splitter::{split, DatasetSplits};

pub use types::calendar::CalendarFields;
pub use types::pollutant::Pollutant;
pub use types::traits::split_boundary::{BoundaryRange, SplitBoundary};
