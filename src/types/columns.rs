//! Column names shared by the source table and the engineered dataset.

// Keys
pub(crate) const COL_DATETIME: &str = "datetime";
pub(crate) const COL_STATION: &str = "station";

// Weather covariates
pub(crate) const COL_TEMP: &str = "TEMP"; // Temperature
pub(crate) const COL_DEWP: &str = "DEWP"; // Dew point
pub(crate) const COL_PRES: &str = "PRES"; // Pressure
pub(crate) const COL_WSPM: &str = "WSPM"; // Wind speed
pub(crate) const COL_RAIN: &str = "RAIN"; // Precipitation
pub(crate) const COL_WD: &str = "wd"; // Wind direction, categorical

// Calendar fields, derived from the timestamp
pub(crate) const COL_YEAR: &str = "year";
pub(crate) const COL_MONTH: &str = "month";
pub(crate) const COL_DAY: &str = "day";
pub(crate) const COL_HOUR: &str = "hour";
pub(crate) const COL_DAY_OF_WEEK: &str = "day_of_week";

pub(crate) const COL_TARGET: &str = "target";

pub(crate) const WEATHER_COLUMNS: [&str; 5] = [COL_TEMP, COL_DEWP, COL_PRES, COL_WSPM, COL_RAIN];

/// Name of the lag-`i` column derived from `base`. The pollutant itself gets the
/// bare `lag_{i}` name, covariates are prefixed with their column code.
pub(crate) fn lag_column(prefix: Option<&str>, i: usize) -> String {
    match prefix {
        Some(p) => format!("{p}_lag_{i}"),
        None => format!("lag_{i}"),
    }
}

pub(crate) fn roll_mean_column(prefix: Option<&str>, window_size: usize) -> String {
    match prefix {
        Some(p) => format!("{p}_roll_mean_{window_size}"),
        None => format!("roll_mean_{window_size}"),
    }
}
