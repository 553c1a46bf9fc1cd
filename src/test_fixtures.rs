//! Synthetic multi-station tables shared by the unit tests.

use crate::types::columns::{
    COL_DATETIME, COL_DEWP, COL_PRES, COL_RAIN, COL_STATION, COL_TEMP, COL_WD, COL_WSPM,
};
use crate::Pollutant;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use polars::prelude::*;

const WIND_DIRECTIONS: [&str; 4] = ["N", "E", "S", "W"];

pub(crate) struct StationSpec {
    pub name: &'static str,
    pub base: f64,
    pub hours: usize,
}

impl StationSpec {
    pub fn new(name: &'static str, base: f64, hours: usize) -> Self {
        Self { name, base, hours }
    }
}

/// 2013-03-01 00:00, a Friday.
pub(crate) fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// PM2.5 reading of a station with the given `base` at hour `t`.
pub(crate) fn value_at(base: f64, t: usize) -> f64 {
    base + t as f64
}

pub(crate) fn ms_to_datetime(ms: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(ms).unwrap().naive_utc()
}

/// Hourly observations for each station, starting at [`start`].
///
/// PM2.5 follows [`value_at`]; the other pollutants are offset copies of it.
/// Temperature starts at `base / 100 - 5` and rises 0.5 per hour. Rows are stored
/// interleaved across stations and in reverse time order, so anything that relies
/// on storage order instead of sorting breaks.
pub(crate) fn hourly_stations(stations: &[StationSpec]) -> DataFrame {
    let mut datetimes = Vec::new();
    let mut names = Vec::new();
    let mut pollutants: Vec<Vec<f64>> = vec![Vec::new(); Pollutant::ALL.len()];
    let mut temp = Vec::new();
    let mut wd = Vec::new();

    let longest = stations.iter().map(|s| s.hours).max().unwrap_or(0);
    for t in 0..longest {
        for station in stations.iter().filter(|s| t < s.hours) {
            datetimes.push(start() + Duration::hours(t as i64));
            names.push(station.name);
            for (j, values) in pollutants.iter_mut().enumerate() {
                values.push(value_at(station.base, t) + 100.0 * j as f64);
            }
            temp.push(station.base / 100.0 - 5.0 + 0.5 * t as f64);
            wd.push(WIND_DIRECTIONS[t % WIND_DIRECTIONS.len()]);
        }
    }
    let rows = datetimes.len();

    let mut columns = vec![
        Column::new(COL_DATETIME.into(), &datetimes),
        Column::new(COL_STATION.into(), &names),
    ];
    for (pollutant, values) in Pollutant::ALL.iter().zip(&pollutants) {
        columns.push(Column::new(pollutant.column_name().into(), values));
    }
    columns.extend([
        Column::new(COL_TEMP.into(), &temp),
        Column::new(COL_DEWP.into(), vec![-10.0; rows]),
        Column::new(COL_PRES.into(), vec![1015.0; rows]),
        Column::new(COL_WSPM.into(), vec![2.5; rows]),
        Column::new(COL_RAIN.into(), vec![0.0; rows]),
        Column::new(COL_WD.into(), &wd),
    ]);

    DataFrame::new(columns).unwrap().reverse()
}
