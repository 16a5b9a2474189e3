use crate::exif::Rational;
use chrono::{FixedOffset, Offset, Utc};
use chrono_tz::Tz;

/// Every string and rational EXIF needs to describe one capture instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifTimestamp {
    /// Local wall-clock time, `YYYY:MM:DD HH:MM:SS`.
    pub datetime: String,
    /// Milliseconds, zero padded to three digits.
    pub subsec: String,
    /// UTC calendar date, `YYYY:MM:DD`.
    pub gps_date: String,
    /// UTC time of day as `(h/1, m/1, s/1)`.
    pub gps_time: [Rational; 3],
    /// Offset of the local time from UTC, `±HH:MM`.
    pub offset: String,
}

/// Where the local UTC offset for a capture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSource {
    /// Always the same offset.
    Fixed(FixedOffset),
    /// An IANA zone; the offset follows DST at the capture instant.
    Zone(Tz),
    /// The IANA zone containing the photo's coordinate.
    FromLocation,
}

pub const DEFAULT_OFFSET_SECONDS: i32 = 3600;

impl Default for OffsetSource {
    fn default() -> Self {
        Self::Fixed(FixedOffset::east_opt(DEFAULT_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix()))
    }
}
