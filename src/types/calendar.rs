//! Calendar fields derived from an observation timestamp.
//!
//! Calendar values are never read from the source table. They are a pure function
//! of `datetime`, available both per timestamp ([`CalendarFields`]) and as polars
//! expressions for whole frames ([`calendar_exprs`]).

use crate::types::columns::{
    COL_DATETIME, COL_DAY, COL_DAY_OF_WEEK, COL_HOUR, COL_MONTH, COL_YEAR,
};
use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::{col, DataType, Expr};

/// Calendar breakdown of a single timestamp.
///
/// `day_of_week` follows ISO numbering: Monday is `1`, Sunday is `7`. The frame
/// expressions in [`calendar_exprs`] use the same convention.
///
/// # Examples
///
/// ```
/// use airquality_features::CalendarFields;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2015, 6, 30).unwrap().and_hms_opt(23, 0, 0).unwrap();
/// let fields = CalendarFields::from(ts);
/// assert_eq!(fields.day_of_week, 2); // a Tuesday
/// assert_eq!(fields.hour, 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub day_of_week: u32,
}

impl From<NaiveDateTime> for CalendarFields {
    fn from(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
            day: ts.day(),
            hour: ts.hour(),
            day_of_week: ts.weekday().number_from_monday(),
        }
    }
}

/// Expressions adding `year`, `month`, `day`, `hour` and `day_of_week` columns,
/// all as `Int32`, computed from the `datetime` column.
pub(crate) fn calendar_exprs() -> Vec<Expr> {
    let ts = || col(COL_DATETIME).dt();
    vec![
        ts().year().cast(DataType::Int32).alias(COL_YEAR),
        ts().month().cast(DataType::Int32).alias(COL_MONTH),
        ts().day().cast(DataType::Int32).alias(COL_DAY),
        ts().hour().cast(DataType::Int32).alias(COL_HOUR),
        // polars weekday() is ISO: Monday = 1
        ts().weekday().cast(DataType::Int32).alias(COL_DAY_OF_WEEK),
    ]
}
