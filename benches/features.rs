use airquality_features::{split, FeatureBuilder, FeatureParams, InMemorySource, Pollutant};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;

const STATIONS: [&str; 12] = [
    "Aotizhongxin",
    "Changping",
    "Dingling",
    "Dongsi",
    "Guanyuan",
    "Gucheng",
    "Huairou",
    "Nongzhanguan",
    "Shunyi",
    "Tiantan",
    "Wanliu",
    "Wanshouxigong",
];

/// One synthetic year of hourly rows for twelve stations.
fn synthetic_year() -> DataFrame {
    let start = NaiveDate::from_ymd_opt(2014, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let hours = 365 * 24;
    let rows = hours * STATIONS.len();

    let mut datetime = Vec::with_capacity(rows);
    let mut station = Vec::with_capacity(rows);
    let mut value = Vec::with_capacity(rows);
    let mut temp = Vec::with_capacity(rows);
    for (s, name) in STATIONS.iter().enumerate() {
        for h in 0..hours {
            datetime.push(start + Duration::hours(h as i64));
            station.push(*name);
            value.push(50.0 + ((h + 7 * s) % 97) as f64);
            temp.push(((h % 24) as f64) - 5.0);
        }
    }

    df!(
        "datetime" => &datetime,
        "station" => &station,
        "PM2.5" => &value,
        "TEMP" => &temp,
        "DEWP" => vec![-8.0; rows],
        "PRES" => vec![1012.0; rows],
        "WSPM" => vec![1.5; rows],
        "RAIN" => vec![0.0; rows],
        "wd" => vec!["NE"; rows],
    )
    .unwrap()
}

fn bench_features(c: &mut Criterion) {
    let builder = FeatureBuilder::new(InMemorySource::new(synthetic_year()));
    let params = |include_exogenous| FeatureParams {
        pollutant: Pollutant::Pm25,
        lag: 24,
        window_size: 24,
        include_exogenous,
    };

    c.bench_function("build_aggregated", |b| {
        b.iter(|| builder.build(black_box(params(false))).unwrap())
    });
    c.bench_function("build_per_station", |b| {
        b.iter(|| builder.build(black_box(params(true))).unwrap())
    });

    let dataset = builder.build(params(true)).unwrap();
    c.bench_function("split_per_station", |b| {
        b.iter(|| split(black_box(&dataset), "2014-08-31", "2014-10-31").unwrap())
    });
}

criterion_group!(benches, bench_features);
criterion_main!(benches);
