use airquality_features::{split, AirQualityError, CsvSource, FeatureBuilder, FeatureError, Pollutant};
use std::env;

fn main() -> Result<(), AirQualityError> {
    configure_polars_display();

    // Reads output_data/cleaned_interp.csv
    let builder = FeatureBuilder::new(CsvSource::default());
    let dataset = builder
        .build_features()
        .pollutant(Pollutant::Pm25)
        .lag(3)
        .window_size(24)
        .include_exogenous(false)
        .call()?;
    println!("{}", dataset.frame().head(Some(5)));

    let splits = split(&dataset, "2015-06-30", "2016-01-31")?;
    println!("{}", splits.report);

    let (features, target) = dataset
        .into_features_and_target()
        .map_err(FeatureError::from)?;
    println!("{} feature columns, {} targets", features.width(), target.len());

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
