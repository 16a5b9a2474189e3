//! Module for formatting capture instants into EXIF time tags.
pub mod error;
mod logic;
mod parsing;
pub mod structs;

pub use error::TimeError;
pub use logic::{EXIF_DATE_FORMAT, EXIF_DATETIME_FORMAT, format_offset, format_timestamp};
pub use parsing::parse_offset_string;
pub use structs::{DEFAULT_OFFSET_SECONDS, ExifTimestamp, OffsetSource};
