use crate::source::error::SourceError;
use crate::source::ObservationSource;
use polars::prelude::{DataFrame, IntoLazy, LazyFrame};

/// An observation table that is already loaded.
///
/// Useful when the caller runs the cleaning step in the same process, and for
/// tests and benchmarks. Every scan starts from the same untouched frame.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    frame: DataFrame,
}

impl InMemorySource {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }
}

impl From<DataFrame> for InMemorySource {
    fn from(frame: DataFrame) -> Self {
        Self::new(frame)
    }
}

impl ObservationSource for InMemorySource {
    fn scan(&self) -> Result<LazyFrame, SourceError> {
        Ok(self.frame.clone().lazy())
    }

    fn describe(&self) -> String {
        format!(
            "in-memory frame ({} rows x {} columns)",
            self.frame.height(),
            self.frame.width()
        )
    }
}
