use crate::source::error::SourceError;
use crate::source::ObservationSource;
use log::info;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Location of the cleaned, interpolated multi-station table written by the
/// upstream cleaning step.
pub const DEFAULT_SOURCE_PATH: &str = "output_data/cleaned_interp.csv";

/// The cleaned observation table stored as a headered CSV file.
///
/// Columns are inferred by polars; `datetime` is parsed as a timestamp while
/// scanning. The scan is lazy, so only the columns a feature build actually
/// selects are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH)
    }
}

impl ObservationSource for CsvSource {
    fn scan(&self) -> Result<LazyFrame, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::NotFound(self.path.clone()));
        }
        info!("Scanning observation source {:?}", self.path);

        LazyCsvReader::new(&self.path)
            .with_has_header(true)
            .with_try_parse_dates(true)
            .finish()
            .map_err(|e| SourceError::CsvScan(self.path.clone(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
