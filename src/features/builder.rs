//! Provides [`FeatureBuilder`], which turns the cleaned multi-station observation
//! table into a supervised-learning dataset for one pollutant.
//!
//! Every lag, rolling and target column is a polars window expression partitioned
//! by `station` over a frame sorted by `(station, datetime)`, so no derived value
//! ever reads another station's rows, whatever order the source stores them in.

use crate::features::dataset::{normalised_datetime, FeatureDataset, Granularity};
use crate::features::error::FeatureError;
use crate::features::params::FeatureParams;
use crate::source::csv_source::CsvSource;
use crate::source::error::SourceError;
use crate::source::ObservationSource;
use crate::types::calendar::calendar_exprs;
use crate::types::columns::{
    lag_column, roll_mean_column, COL_DATETIME, COL_STATION, COL_TARGET, COL_TEMP, COL_WD,
    WEATHER_COLUMNS,
};
use crate::Pollutant;
use bon::bon;
use log::{debug, info};
use polars::prelude::*;

/// Builds feature datasets from an [`ObservationSource`].
///
/// The builder holds no state besides its source; each call reads the source
/// afresh and returns a new [`FeatureDataset`], so repeated calls with the same
/// arguments produce identical frames.
///
/// # Examples
///
/// ```no_run
/// use airquality_features::{CsvSource, FeatureBuilder, Pollutant};
///
/// # fn main() -> Result<(), airquality_features::AirQualityError> {
/// // Reads output_data/cleaned_interp.csv
/// let builder = FeatureBuilder::new(CsvSource::default());
/// let dataset = builder
///     .build_features()
///     .pollutant(Pollutant::Pm25)
///     .lag(3)
///     .window_size(24)
///     .include_exogenous(false)
///     .call()?;
/// println!("{}", dataset.frame());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeatureBuilder<S = CsvSource> {
    source: S,
}

impl Default for FeatureBuilder<CsvSource> {
    fn default() -> Self {
        Self::new(CsvSource::default())
    }
}

#[bon]
impl<S: ObservationSource> FeatureBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds the dataset for one pollutant.
    ///
    /// This method uses a builder pattern. Every argument is required; there is no
    /// implicit "no features" default.
    ///
    /// # Arguments
    ///
    /// * `.pollutant(Pollutant)`: The pollutant to forecast.
    /// * `.lag(usize)`: Adds `lag_1..=lag_{lag}`, the pollutant value `i` rows earlier
    ///   within the same station. `0` adds no lag columns.
    /// * `.window_size(usize)`: Adds `roll_mean_{window_size}`, the mean over the
    ///   trailing `window_size` rows of the station, current row included. Must be at
    ///   least `1`.
    /// * `.include_exogenous(bool)`: When `true`, keeps per-station rows with weather
    ///   covariates, `wd`, calendar fields and `TEMP_lag_i`/`TEMP_roll_mean_{window_size}`.
    ///   When `false`, averages every numeric column across stations per timestamp.
    ///
    /// # Errors
    ///
    /// See [`FeatureBuilder::build`].
    #[builder]
    pub fn build_features(
        &self,
        pollutant: Pollutant,
        lag: usize,
        window_size: usize,
        include_exogenous: bool,
    ) -> Result<FeatureDataset, FeatureError> {
        self.build(FeatureParams {
            pollutant,
            lag,
            window_size,
            include_exogenous,
        })
    }

    /// Builds the dataset described by `params`.
    ///
    /// The steps are: select the required columns, sort by `(station, datetime)`,
    /// derive lag/rolling/target columns per station, drop rows where any derived
    /// column is undefined, then either average across stations or keep per-station
    /// rows, and finally cast text columns to `Categorical`.
    ///
    /// # Errors
    ///
    /// * [`FeatureError::InvalidWindowSize`] if `params.window_size` is zero. Checked
    ///   before the source is touched.
    /// * [`FeatureError::Source`] if the source cannot be opened or its schema read.
    /// * [`FeatureError::MissingColumn`] if a required column is absent.
    /// * [`FeatureError::UnparseableTimestamp`] if `datetime` is not temporal.
    /// * [`FeatureError::EmptyDataset`] if no row survives the warm-up drop.
    /// * [`FeatureError::DataFrameProcessing`] for any other polars failure.
    pub fn build(&self, params: FeatureParams) -> Result<FeatureDataset, FeatureError> {
        params.validate()?;
        let pollutant = params.pollutant.column_name();

        let mut lf = self.source.scan()?;
        let schema = lf.collect_schema().map_err(|e| SourceError::Schema {
            source_name: self.source.describe(),
            source: e,
        })?;

        let required = required_columns(&params);
        if let Some(missing) = required.iter().find(|name| schema.get(name).is_none()) {
            return Err(FeatureError::MissingColumn {
                column: missing.to_string(),
                source_name: self.source.describe(),
            });
        }
        let datetime = match schema.get(COL_DATETIME) {
            Some(dtype) => normalised_datetime(dtype)?,
            None => col(COL_DATETIME),
        };

        let mut selection = vec![datetime, col(COL_STATION)];
        selection.push(col(pollutant).cast(DataType::Float64));
        if params.include_exogenous {
            selection.extend(WEATHER_COLUMNS.map(|c| col(c).cast(DataType::Float64)));
            selection.push(col(COL_WD));
        }

        let mut lf = lf.select(selection);
        if params.include_exogenous {
            lf = lf.with_columns(calendar_exprs());
        }

        let (derived_names, derived_exprs) = derived_columns(&params);
        debug!(
            "Deriving columns {:?}; the first {} rows of every station are warm-up",
            derived_names,
            params.warm_up_rows()
        );

        let lf = lf
            .sort_by_exprs(
                [col(COL_STATION), col(COL_DATETIME)],
                SortMultipleOptions::default(),
            )
            .with_columns(derived_exprs);
        let lf = match all_defined(&derived_names) {
            Some(predicate) => lf.filter(predicate),
            None => lf,
        };

        let (lf, granularity) = if params.include_exogenous {
            let lf = lf.sort_by_exprs(
                [col(COL_DATETIME), col(COL_STATION)],
                SortMultipleOptions::default(),
            );
            (lf, Granularity::PerStation)
        } else {
            let aggregations: Vec<Expr> = std::iter::once(pollutant)
                .chain(derived_names.iter().map(String::as_str))
                .map(|name| col(name).mean())
                .collect();
            let lf = lf
                .group_by([col(COL_DATETIME)])
                .agg(aggregations)
                .sort_by_exprs([col(COL_DATETIME)], SortMultipleOptions::default());
            (lf, Granularity::Aggregated)
        };

        let df = lf.collect()?;
        if df.height() == 0 {
            return Err(FeatureError::EmptyDataset {
                pollutant: params.pollutant,
                lag: params.lag,
                window_size: params.window_size,
            });
        }
        let df = categorise_text_columns(df)?;

        info!(
            "Built {:?} dataset for {} from {}: {} rows x {} columns (lag={}, window_size={})",
            granularity,
            params.pollutant,
            self.source.describe(),
            df.height(),
            df.width(),
            params.lag,
            params.window_size
        );
        Ok(FeatureDataset::new(df, params.pollutant, granularity))
    }
}

/// Builds the dataset for `pollutant` from the cleaned table at
/// [`crate::DEFAULT_SOURCE_PATH`].
///
/// Shorthand for a [`FeatureBuilder`] over [`CsvSource::default`] followed by
/// [`FeatureBuilder::build`].
pub fn build_features(
    pollutant: Pollutant,
    lag: usize,
    window_size: usize,
    include_exogenous: bool,
) -> Result<FeatureDataset, FeatureError> {
    FeatureBuilder::new(CsvSource::default()).build(FeatureParams {
        pollutant,
        lag,
        window_size,
        include_exogenous,
    })
}

fn required_columns(params: &FeatureParams) -> Vec<&'static str> {
    let mut columns = vec![COL_DATETIME, COL_STATION, params.pollutant.column_name()];
    if params.include_exogenous {
        columns.extend(WEATHER_COLUMNS);
        columns.push(COL_WD);
    }
    columns
}

fn per_station(expr: Expr) -> Expr {
    expr.over([col(COL_STATION)])
}

/// Lag and trailing-mean columns of `base`, named with `prefix` (if any).
fn window_features(
    base: &str,
    prefix: Option<&str>,
    lag: usize,
    window_size: usize,
) -> Vec<(String, Expr)> {
    let mut features: Vec<(String, Expr)> = (1..=lag)
        .map(|i| {
            let name = lag_column(prefix, i);
            let expr = per_station(col(base).shift(lit(i as i64))).alias(name.as_str());
            (name, expr)
        })
        .collect();

    let name = roll_mean_column(prefix, window_size);
    let options = RollingOptionsFixedWindow {
        window_size,
        min_periods: window_size,
        ..Default::default()
    };
    let expr = per_station(col(base).rolling_mean(options)).alias(name.as_str());
    features.push((name, expr));
    features
}

/// Names and expressions of every derived column, target last.
fn derived_columns(params: &FeatureParams) -> (Vec<String>, Vec<Expr>) {
    let pollutant = params.pollutant.column_name();
    let mut columns = window_features(pollutant, None, params.lag, params.window_size);
    if params.include_exogenous {
        columns.extend(window_features(
            COL_TEMP,
            Some(COL_TEMP),
            params.lag,
            params.window_size,
        ));
    }
    columns.push((
        COL_TARGET.to_string(),
        per_station(col(pollutant).shift(lit(-1i64))).alias(COL_TARGET),
    ));
    columns.into_iter().unzip()
}

/// Row predicate that holds only when every named column is neither null nor NaN.
fn all_defined(columns: &[String]) -> Option<Expr> {
    columns
        .iter()
        .map(|name| {
            col(name.as_str())
                .is_not_null()
                .and(col(name.as_str()).is_not_nan())
        })
        .reduce(|acc, defined| acc.and(defined))
}

fn categorise_text_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let casts: Vec<Expr> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype() == &DataType::String)
        .map(|c| {
            col(c.name().clone()).cast(DataType::Categorical(None, CategoricalOrdering::Physical))
        })
        .collect();
    if casts.is_empty() {
        return Ok(df);
    }
    df.lazy().with_columns(casts).collect()
}
