use crate::source::error::SourceError;
use crate::Pollutant;
use polars::error::PolarsError;
use polars::prelude::DataType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Unknown pollutant '{0}', expected one of PM2.5, PM10, NO2, SO2, CO, O3")]
    UnknownPollutant(String),

    #[error("Rolling window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Required column '{column}' not found in source '{source_name}'")]
    MissingColumn { column: String, source_name: String },

    #[error("Column '{column}' holds {dtype} values that could not be parsed as timestamps")]
    UnparseableTimestamp { column: String, dtype: DataType },

    #[error(
        "No rows left for {pollutant} after dropping warm-up rows (lag={lag}, window_size={window_size}); \
         the windows are longer than every station's history"
    )]
    EmptyDataset {
        pollutant: Pollutant,
        lag: usize,
        window_size: usize,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
