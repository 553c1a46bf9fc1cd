//! Contains [`FeatureDataset`], the engineered supervised-learning table produced by
//! [`crate::FeatureBuilder`] and consumed by [`crate::split`].

use crate::features::error::FeatureError;
use crate::types::columns::{COL_DATETIME, COL_STATION, COL_TARGET};
use crate::Pollutant;
use polars::prelude::*;

/// Whether rows are per station or averaged across stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One row per timestamp, every numeric column averaged over the stations that
    /// reported at that timestamp. No `station` or calendar columns.
    Aggregated,
    /// One row per (station, timestamp), with weather covariates and calendar fields.
    PerStation,
}

/// An engineered dataset, ordered by ascending `datetime`.
///
/// Per-station datasets are additionally ordered by `station` within a timestamp.
/// The wrapped frame is never handed out mutably; splitting produces new frames.
///
/// # Note on Datetimes
///
/// The `datetime` column is always `Datetime(Milliseconds, None)`: timezone-naive,
/// in whatever local convention the source table used.
#[derive(Debug, Clone)]
pub struct FeatureDataset {
    frame: DataFrame,
    pollutant: Pollutant,
    granularity: Granularity,
}

impl FeatureDataset {
    pub(crate) fn new(frame: DataFrame, pollutant: Pollutant, granularity: Granularity) -> Self {
        Self {
            frame,
            pollutant,
            granularity,
        }
    }

    /// Wraps a frame that was engineered elsewhere so it can be split.
    ///
    /// The frame must have a temporal `datetime` column and a `target` column.
    /// `datetime` is normalised to millisecond precision and the rows are sorted by
    /// it (stable, so rows sharing a timestamp keep their relative order). A
    /// `station` column marks the dataset as [`Granularity::PerStation`].
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::MissingColumn`] if `datetime` or `target` is absent,
    /// and [`FeatureError::UnparseableTimestamp`] if `datetime` is not temporal.
    pub fn from_frame(frame: DataFrame, pollutant: Pollutant) -> Result<Self, FeatureError> {
        for required in [COL_DATETIME, COL_TARGET] {
            if frame.get_column_index(required).is_none() {
                return Err(FeatureError::MissingColumn {
                    column: required.to_string(),
                    source_name: "provided frame".to_string(),
                });
            }
        }
        let datetime = normalised_datetime(frame.column(COL_DATETIME)?.dtype())?;
        let granularity = if frame.get_column_index(COL_STATION).is_some() {
            Granularity::PerStation
        } else {
            Granularity::Aggregated
        };

        let frame = frame
            .lazy()
            .with_column(datetime)
            .sort_by_exprs(
                [col(COL_DATETIME)],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;
        Ok(Self::new(frame, pollutant, granularity))
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Names of the model inputs: every column except `datetime` and `target`.
    pub fn feature_columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != COL_DATETIME && name.as_str() != COL_TARGET)
            .map(|name| name.to_string())
            .collect()
    }

    pub fn target(&self) -> PolarsResult<&Column> {
        self.frame.column(COL_TARGET)
    }

    /// Splits the dataset into model inputs and the target column.
    ///
    /// The input frame keeps the row order and drops `datetime` and `target`.
    pub fn into_features_and_target(self) -> PolarsResult<(DataFrame, Column)> {
        let target = self.frame.column(COL_TARGET)?.clone();
        let features = self.frame.drop_many([COL_DATETIME, COL_TARGET]);
        Ok((features, target))
    }
}

/// Cast expression turning a temporal `datetime` column into naive milliseconds.
pub(crate) fn normalised_datetime(dtype: &DataType) -> Result<Expr, FeatureError> {
    match dtype {
        DataType::Datetime(_, _) | DataType::Date => Ok(col(COL_DATETIME)
            .cast(DataType::Datetime(TimeUnit::Milliseconds, None))
            .alias(COL_DATETIME)),
        other => Err(FeatureError::UnparseableTimestamp {
            column: COL_DATETIME.to_string(),
            dtype: other.clone(),
        }),
    }
}
