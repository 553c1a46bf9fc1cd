use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Observation source '{0}' does not exist or is not a file")]
    NotFound(PathBuf),

    #[error("Failed to scan CSV observation source '{0}'")]
    CsvScan(PathBuf, #[source] PolarsError),

    #[error("Failed to resolve the schema of observation source '{source_name}'")]
    Schema {
        source_name: String,
        #[source]
        source: PolarsError,
    },
}
