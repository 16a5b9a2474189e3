//! Coordinates, their EXIF degree/minute/second form, and positional jitter.
mod dms;
pub mod error;
mod jitter;
pub mod structs;

pub use dms::{SECONDS_DENOMINATOR, deg_to_dms};
pub use error::GpsError;
pub use jitter::{
    DEFAULT_JITTER_RADIUS_M, METERS_PER_DEGREE, haversine_distance_m,
    jitter_coordinate, validate_radius,
};
pub use structs::{Axis, Coordinate, DmsCoordinate};
