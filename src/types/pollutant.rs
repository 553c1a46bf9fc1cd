//! Defines the pollutants tracked in the cleaned multi-station source and the
//! column codes they are stored under.

use crate::features::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six pollutants recorded by every station in the source table.
///
/// The string form of each variant is the column code used in the source file
/// (e.g. `"PM2.5"`), which is also what [`FromStr`] accepts and what `serde`
/// reads and writes.
///
/// # Examples
///
/// ```
/// use airquality_features::Pollutant;
///
/// let pm = "PM2.5".parse::<Pollutant>().unwrap();
/// assert_eq!(pm, Pollutant::Pm25);
/// assert_eq!(Pollutant::No2.to_string(), "NO2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    /// Fine particulate matter, diameter below 2.5 µm.
    #[serde(rename = "PM2.5")]
    Pm25,
    /// Particulate matter, diameter below 10 µm.
    #[serde(rename = "PM10")]
    Pm10,
    /// Nitrogen dioxide.
    #[serde(rename = "NO2")]
    No2,
    /// Sulphur dioxide.
    #[serde(rename = "SO2")]
    So2,
    /// Carbon monoxide.
    #[serde(rename = "CO")]
    Co,
    /// Ozone.
    #[serde(rename = "O3")]
    O3,
}

impl Pollutant {
    /// All tracked pollutants, in source column order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// The column code of this pollutant in the source table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for Pollutant {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.column_name() == s)
            .ok_or_else(|| FeatureError::UnknownPollutant(s.to_string()))
    }
}
