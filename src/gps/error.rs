use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpsError {
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Coordinate component is not a finite number")]
    NotFinite,

    /// Longitude degrees per meter are undefined at the poles.
    #[error("Cannot jitter around latitude {0}: longitude scale is undefined at the poles")]
    PolarJitter(f64),

    #[error("Jitter radius must be a finite, non-negative number of meters, got {0}")]
    InvalidRadius(f64),
}
