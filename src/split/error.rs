use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Split boundary {name} = '{value}' cannot be resolved to a timestamp")]
    UnresolvableBoundary { name: &'static str, value: String },

    #[error("Training boundary '{train_end}' lies after validation boundary '{val_end}'")]
    InvertedBoundaries { train_end: String, val_end: String },

    #[error("Failed slicing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
