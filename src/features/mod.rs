pub mod builder;
pub mod dataset;
pub mod error;
pub mod params;
