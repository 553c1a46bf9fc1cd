//! Chronological train/validation/test partitioning of a [`FeatureDataset`].

use crate::features::dataset::FeatureDataset;
use crate::split::error::SplitError;
use crate::split::report::{SplitName, SplitReport, SplitSummary};
use crate::types::columns::COL_DATETIME;
use crate::types::traits::split_boundary::{BoundaryRange, SplitBoundary};
use log::{info, warn};
use polars::prelude::*;

/// The three chronological slices of a dataset and their diagnostic report.
#[derive(Debug, Clone)]
pub struct DatasetSplits {
    pub train: DataFrame,
    pub validation: DataFrame,
    pub test: DataFrame,
    pub report: SplitReport,
}

/// Partitions `dataset` into train, validation and test slices by timestamp.
///
/// * train: every row with `datetime <= train_end`
/// * validation: every row with `train_end <= datetime <= val_end`
/// * test: every row with `datetime >= val_end`
///
/// Adjoining slices overlap: rows stamped exactly at a boundary appear in both
/// slices on either side of it. When a boundary is a bare date (`"2015-06-30"`)
/// it stands for the whole day, so `<=` reaches the last row of that day and
/// `>=` starts at its first row. Nothing is shuffled, no row is dropped, and
/// every slice keeps the dataset's column layout and row order.
///
/// The date range and row count of each slice are returned in
/// [`DatasetSplits::report`] and logged at `info` level.
///
/// # Errors
///
/// * [`SplitError::UnresolvableBoundary`] if a boundary cannot be parsed.
/// * [`SplitError::InvertedBoundaries`] if `train_end` starts after `val_end`.
///
/// # Examples
///
/// ```no_run
/// use airquality_features::{build_features, split, Pollutant};
///
/// # fn main() -> Result<(), airquality_features::AirQualityError> {
/// let dataset = build_features(Pollutant::Pm25, 3, 24, false)?;
/// let splits = split(&dataset, "2015-06-30", "2016-01-31")?;
/// println!("{}", splits.report);
/// assert!(splits.report.train().rows > 0);
/// # Ok(())
/// # }
/// ```
pub fn split(
    dataset: &FeatureDataset,
    train_end: impl SplitBoundary,
    val_end: impl SplitBoundary,
) -> Result<DatasetSplits, SplitError> {
    let train_range = resolve("train_end", &train_end)?;
    let val_range = resolve("val_end", &val_end)?;
    if train_range.start > val_range.start {
        return Err(SplitError::InvertedBoundaries {
            train_end: train_end.to_string(),
            val_end: val_end.to_string(),
        });
    }

    let ts = || col(COL_DATETIME);
    let slice = |predicate: Expr| dataset.frame().clone().lazy().filter(predicate).collect();

    let train = slice(ts().lt_eq(lit(train_range.end)))?;
    let validation = slice(
        ts().gt_eq(lit(train_range.start))
            .and(ts().lt_eq(lit(val_range.end))),
    )?;
    let test = slice(ts().gt_eq(lit(val_range.start)))?;

    let report = SplitReport::new(
        SplitSummary::of_frame(SplitName::Train, &train)?,
        SplitSummary::of_frame(SplitName::Validation, &validation)?,
        SplitSummary::of_frame(SplitName::Test, &test)?,
    );
    for summary in report.iter() {
        if summary.is_empty() {
            warn!("{summary}");
        } else {
            info!("{summary}");
        }
    }

    Ok(DatasetSplits {
        train,
        validation,
        test,
        report,
    })
}

fn resolve(name: &'static str, boundary: &impl SplitBoundary) -> Result<BoundaryRange, SplitError> {
    boundary
        .resolve_boundary()
        .ok_or_else(|| SplitError::UnresolvableBoundary {
            name,
            value: boundary.to_string(),
        })
}
