//! Positional jitter: move a coordinate to a random point inside a small disk.

use crate::gps::error::GpsError;
use crate::gps::structs::Coordinate;
use geo::{Distance, Haversine, Point};
use rand::Rng;
use std::f64::consts::TAU;

/// Meters per degree of latitude, and of longitude at the equator.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

pub const DEFAULT_JITTER_RADIUS_M: f64 = 2.0;

pub fn validate_radius(radius_m: f64) -> Result<f64, GpsError> {
    if radius_m.is_finite() && radius_m >= 0.0 {
        Ok(radius_m)
    } else {
        Err(GpsError::InvalidRadius(radius_m))
    }
}

/// Returns a point uniformly distributed over the disk of `radius_m` meters around `origin`.
///
/// The radius is sampled as `sqrt(U) * radius_m`; sampling it uniformly would
/// crowd points towards the center. The generator is passed in so callers can
/// seed it.
///
/// # Errors
///
/// * [`GpsError::PolarJitter`] when `origin` sits on a pole, where a longitude
///   offset in meters has no meaning.
/// * [`GpsError::InvalidRadius`] for a negative or non-finite radius.
pub fn jitter_coordinate<R: Rng + ?Sized>(
    origin: Coordinate,
    radius_m: f64,
    rng: &mut R,
) -> Result<Coordinate, GpsError> {
    let radius_m = validate_radius(radius_m)?;
    if !origin.latitude.is_finite() || !origin.longitude.is_finite() {
        return Err(GpsError::NotFinite);
    }
    let cos_lat = origin.latitude.to_radians().cos();
    if origin.latitude.abs() >= 90.0 || cos_lat.abs() < f64::EPSILON {
        return Err(GpsError::PolarJitter(origin.latitude));
    }

    let r = rng.random::<f64>().sqrt() * radius_m;
    let theta = rng.random::<f64>() * TAU;
    let (dx, dy) = (r * theta.cos(), r * theta.sin());

    let dlat = dy / METERS_PER_DEGREE;
    let dlon = dx / (METERS_PER_DEGREE * cos_lat);

    Ok(Coordinate {
        latitude: (origin.latitude + dlat).clamp(-90.0, 90.0),
        longitude: wrap_longitude(origin.longitude + dlon),
    })
}

/// Folds a longitude back into [-180, 180].
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Great-circle distance between two coordinates in meters.
pub fn haversine_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    Haversine::distance(
        Point::new(a.longitude, a.latitude),
        Point::new(b.longitude, b.latitude),
    )
}
