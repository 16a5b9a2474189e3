//! # Geostamp
//!
//! Stamp GPS position and capture metadata into photos as EXIF.
//!
//! A photo and a coordinate go in; a JPEG with standards-compliant EXIF comes out.
//!
//! ## Key Features
//!
//! - **GPS tags**: Decimal degrees are written as degree/minute/second rationals with hemisphere references.
//! - **Positional jitter**: The written position can be moved to a uniformly random point within a small radius.
//! - **Capture metadata**: Date/time, sub-second and UTC offset tags, the GPS UTC date and time, plus a plausible camera profile.
//! - **Time zones**: The local offset can be fixed, taken from an IANA zone, or looked up from the coordinate.
//! - **HTTP service**: A JSON endpoint that accepts a base64 image and returns the stamped JPEG.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geostamp::{Coordinate, GeoStamper};
//!
//! fn main() -> color_eyre::Result<()> {
//!     let photo = std::fs::read("photo.png")?;
//!
//!     let stamper = GeoStamper::builder().build()?;
//!     let coordinate = Coordinate::new(40.4168, -3.7038)?;
//!     let result = stamper.stamp(&photo, coordinate, chrono::Utc::now(), &mut rand::rng())?;
//!
//!     std::fs::write(&result.filename, &result.image)?;
//!     println!("Stamped at {:?}", result.coordinate);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod exif;
pub mod features;
pub mod geo_stamper;
pub mod gps;
pub mod server;
pub mod time;

pub use error::GeostampError;
pub use geo_stamper::{GeoStamper, StampResult, output_filename};
pub use gps::{Coordinate, deg_to_dms, jitter_coordinate};
pub use time::{OffsetSource, format_timestamp};
