//! Turning a capture instant into EXIF date/time strings and GPS UTC stamps.

use super::error::TimeError;
use super::structs::{ExifTimestamp, OffsetSource};
use crate::exif::Rational;
use crate::gps::Coordinate;
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tzf_rs::DefaultFinder;

// --- Global Timezone Finder ---
static FINDER: std::sync::LazyLock<DefaultFinder> = std::sync::LazyLock::new(DefaultFinder::new);

pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d";

/// Formats a local timestamp into the EXIF date/time, sub-second, offset and GPS UTC forms.
pub fn format_timestamp(local: DateTime<FixedOffset>) -> ExifTimestamp {
    let utc = local.with_timezone(&Utc);
    let millis = local.timestamp_subsec_millis().min(999);

    ExifTimestamp {
        datetime: local.format(EXIF_DATETIME_FORMAT).to_string(),
        subsec: format!("{millis:03}"),
        gps_date: utc.format(EXIF_DATE_FORMAT).to_string(),
        gps_time: [
            Rational::whole(utc.hour()),
            Rational::whole(utc.minute()),
            // Leap seconds report 59 + 1s of nanos; clamp to a valid EXIF second
            Rational::whole(utc.second().min(59)),
        ],
        offset: format_offset(*local.offset()),
    }
}

/// `±HH:MM` for a fixed offset.
pub fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

impl OffsetSource {
    /// Resolves the UTC offset to use for `instant` taken at `coordinate`.
    pub fn resolve(
        &self,
        instant: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<FixedOffset, TimeError> {
        match self {
            Self::Fixed(offset) => Ok(*offset),
            Self::Zone(tz) => Ok(zone_offset(*tz, instant)),
            Self::FromLocation => {
                let name = FINDER.get_tz_name(coordinate.longitude, coordinate.latitude);
                let tz = Tz::from_str(name).map_err(|_| TimeError::NoTimezoneForLocation {
                    latitude: coordinate.latitude.to_string(),
                    longitude: coordinate.longitude.to_string(),
                })?;
                Ok(zone_offset(tz, instant))
            }
        }
    }

    /// Converts `instant` into local time at the resolved offset.
    pub fn localize(
        &self,
        instant: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<DateTime<FixedOffset>, TimeError> {
        let offset = self.resolve(instant, coordinate)?;
        Ok(instant.with_timezone(&offset))
    }
}

fn zone_offset(tz: Tz, instant: DateTime<Utc>) -> FixedOffset {
    tz.offset_from_utc_datetime(&instant.naive_utc()).fix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn plus_one() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    fn local(
        offset: FixedOffset,
        (y, mo, d): (i32, u32, u32),
        (h, mi, s, ms): (u32, u32, u32, u32),
    ) -> DateTime<FixedOffset> {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap();
        offset.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn test_formats_local_and_gps_fields() {
        let ts = format_timestamp(local(plus_one(), (2024, 3, 15), (14, 30, 45, 123)));

        assert_eq!(ts.datetime, "2024:03:15 14:30:45");
        assert_eq!(ts.subsec, "123");
        assert_eq!(ts.gps_date, "2024:03:15");
        assert_eq!(
            ts.gps_time,
            [Rational::whole(13), Rational::whole(30), Rational::whole(45)]
        );
        assert_eq!(ts.offset, "+01:00");
    }

    #[test]
    fn test_gps_date_rolls_back_across_midnight() {
        let ts = format_timestamp(local(plus_one(), (2024, 3, 16), (0, 30, 0, 0)));

        assert_eq!(ts.datetime, "2024:03:16 00:30:00");
        assert_eq!(ts.gps_date, "2024:03:15");
        assert_eq!(ts.gps_time[0], Rational::whole(23));
        assert_eq!(ts.subsec, "000");
    }

    #[test]
    fn test_negative_offset_with_minutes() {
        let offset = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
        let ts = format_timestamp(local(offset, (2023, 12, 31), (22, 0, 5, 7)));

        assert_eq!(ts.offset, "-03:30");
        assert_eq!(ts.subsec, "007");
        assert_eq!(ts.gps_date, "2024:01:01");
        assert_eq!(
            ts.gps_time,
            [Rational::whole(1), Rational::whole(30), Rational::whole(5)]
        );
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(FixedOffset::east_opt(0).unwrap()), "+00:00");
        assert_eq!(format_offset(FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap()), "+05:45");
        assert_eq!(format_offset(FixedOffset::west_opt(8 * 3600).unwrap()), "-08:00");
    }

    #[test]
    fn test_zone_offset_follows_dst() {
        let madrid = OffsetSource::Zone(chrono_tz::Europe::Madrid);
        let anywhere = Coordinate::new(0.0, 0.0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

        assert_eq!(madrid.resolve(winter, anywhere).unwrap().local_minus_utc(), 3600);
        assert_eq!(madrid.resolve(summer, anywhere).unwrap().local_minus_utc(), 7200);
    }

    #[test]
    fn test_offset_from_location() {
        let tokyo = Coordinate::new(35.6762, 139.6503).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 3, 0, 0).unwrap();
        let local = OffsetSource::FromLocation.localize(instant, tokyo).unwrap();

        assert_eq!(local.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(format_timestamp(local).datetime, "2024:03:15 12:00:00");
    }

    #[test]
    fn test_fixed_offset_ignores_location() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 13, 30, 45).unwrap();
        let tokyo = Coordinate::new(35.6762, 139.6503).unwrap();
        let local = OffsetSource::default().localize(instant, tokyo).unwrap();

        assert_eq!(format_timestamp(local).datetime, "2024:03:15 14:30:45");
    }
}
