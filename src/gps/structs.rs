use crate::exif::Rational;
use crate::gps::error::GpsError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GpsError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GpsError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GpsError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GpsError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Which of the two GPS axes a value belongs to; decides the hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Reference letter for a signed value. Zero counts as positive.
    pub fn reference(self, value: f64) -> char {
        let positive = value >= 0.0;
        match (self, positive) {
            (Self::Latitude, true) => 'N',
            (Self::Latitude, false) => 'S',
            (Self::Longitude, true) => 'E',
            (Self::Longitude, false) => 'W',
        }
    }
}

/// A coordinate component in the form EXIF GPS tags store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsCoordinate {
    pub reference: char,
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
}

impl DmsCoordinate {
    pub fn rationals(&self) -> Vec<Rational> {
        vec![self.degrees, self.minutes, self.seconds]
    }

    /// Decimal degrees, negative for 'S' and 'W'.
    pub fn to_decimal(&self) -> Option<f64> {
        let magnitude = self.degrees.to_f64()?
            + self.minutes.to_f64()? / 60.0
            + self.seconds.to_f64()? / 3600.0;
        Some(match self.reference {
            'S' | 'W' => -magnitude,
            _ => magnitude,
        })
    }
}
