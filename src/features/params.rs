use crate::features::error::FeatureError;
use crate::Pollutant;
use serde::{Deserialize, Serialize};

/// Settings for one feature build, in a form that can live in a config file.
///
/// None of the fields has a default: a config that leaves out `lag` or
/// `window_size` fails to deserialize instead of silently building a
/// target-only dataset.
///
/// # Examples
///
/// ```
/// use airquality_features::{FeatureParams, Pollutant};
///
/// let params = FeatureParams {
///     pollutant: Pollutant::O3,
///     lag: 24,
///     window_size: 6,
///     include_exogenous: true,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureParams {
    pub pollutant: Pollutant,
    /// Number of trailing timesteps to expose as `lag_1..=lag_{lag}`. Zero means
    /// no lag columns.
    pub lag: usize,
    /// Length of the trailing rolling-mean window. One means the rolling mean is
    /// the raw value.
    pub window_size: usize,
    /// Keep per-station rows with weather covariates and calendar fields instead of
    /// averaging across stations.
    pub include_exogenous: bool,
}

impl FeatureParams {
    /// Rejects parameter combinations that cannot produce a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidWindowSize`] when `window_size` is zero.
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.window_size < 1 {
            return Err(FeatureError::InvalidWindowSize(self.window_size));
        }
        Ok(())
    }

    /// Leading rows per station that cannot carry every derived feature.
    pub fn warm_up_rows(&self) -> usize {
        self.lag.max(self.window_size.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_is_rejected() {
        let params = FeatureParams {
            pollutant: Pollutant::Co,
            lag: 0,
            window_size: 0,
            include_exogenous: false,
        };
        assert!(matches!(
            params.validate(),
            Err(FeatureError::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn warm_up_is_the_longer_of_lag_and_window() {
        let mut params = FeatureParams {
            pollutant: Pollutant::Pm25,
            lag: 2,
            window_size: 3,
            include_exogenous: false,
        };
        assert_eq!(params.warm_up_rows(), 2);
        params.window_size = 24;
        assert_eq!(params.warm_up_rows(), 23);
        params.lag = 0;
        params.window_size = 1;
        assert_eq!(params.warm_up_rows(), 0);
    }

    #[test]
    fn deserializes_from_config() {
        let json = r#"{"pollutant":"PM10","lag":3,"window_size":12,"include_exogenous":true}"#;
        let params: FeatureParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.pollutant, Pollutant::Pm10);
        assert_eq!(params.lag, 3);
        assert_eq!(params.window_size, 12);
        assert!(params.include_exogenous);
    }

    #[test]
    fn config_must_spell_out_every_field() {
        let missing_lag = r#"{"pollutant":"PM10","window_size":12,"include_exogenous":false}"#;
        assert!(serde_json::from_str::<FeatureParams>(missing_lag).is_err());

        let negative_lag =
            r#"{"pollutant":"PM10","lag":-1,"window_size":12,"include_exogenous":false}"#;
        assert!(serde_json::from_str::<FeatureParams>(negative_lag).is_err());

        let bad_pollutant =
            r#"{"pollutant":"PM1","lag":1,"window_size":12,"include_exogenous":false}"#;
        assert!(serde_json::from_str::<FeatureParams>(bad_pollutant).is_err());
    }
}
