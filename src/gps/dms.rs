//! Decimal degrees to EXIF degree/minute/second rationals.

use crate::exif::Rational;
use crate::gps::structs::{Axis, DmsCoordinate};

/// Denominator of the seconds rational: 1/100 second precision.
pub const SECONDS_DENOMINATOR: u32 = 100;

/// Converts a signed decimal coordinate into its EXIF GPS form.
///
/// Minutes and seconds are truncated toward zero, never rounded, so the
/// recomposed value is at most 1/100 second below `|value|`.
pub fn deg_to_dms(value: f64, axis: Axis) -> DmsCoordinate {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = ((abs - degrees) * 60.0).floor();
    let seconds = ((abs - degrees - minutes / 60.0) * 3600.0).max(0.0);
    let seconds_scaled = (seconds * f64::from(SECONDS_DENOMINATOR)).floor();

    DmsCoordinate {
        reference: axis.reference(value),
        degrees: Rational::whole(degrees as u32),
        minutes: Rational::whole(minutes as u32),
        seconds: Rational::new(seconds_scaled as u32, SECONDS_DENOMINATOR),
    }
}
