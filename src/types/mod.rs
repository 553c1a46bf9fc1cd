pub mod calendar;
pub(crate) mod columns;
pub mod pollutant;
pub mod traits;
