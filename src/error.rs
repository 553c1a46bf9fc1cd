use crate::features::error::FeatureError;
use crate::source::error::SourceError;
use crate::split::error::SplitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
