//! Builds the tag blocks for a stamped photo.

use super::catalog::CameraProfile;
use super::structs::{ExifPayload, TagId, TagValue};
use crate::gps::{Axis, Coordinate, deg_to_dms};
use crate::time::ExifTimestamp;

/// Assembles the GPS block and, when given, the time and device blocks.
///
/// The GPS position is always written. `timestamp` adds the local date/time,
/// sub-second and offset tags plus the GPS UTC date and time. `camera` adds
/// the 0th/Exif device and exposure tags.
pub fn assemble_payload(
    coordinate: Coordinate,
    timestamp: Option<&ExifTimestamp>,
    camera: Option<&CameraProfile>,
) -> ExifPayload {
    let mut payload = ExifPayload::new();
    insert_position(&mut payload, coordinate);
    if let Some(ts) = timestamp {
        insert_timestamp(&mut payload, ts);
    }
    if let Some(camera) = camera {
        insert_camera(&mut payload, camera);
    }
    payload
}

fn ascii(s: impl Into<String>) -> TagValue {
    TagValue::Ascii(s.into())
}

fn insert_position(payload: &mut ExifPayload, coordinate: Coordinate) {
    let latitude = deg_to_dms(coordinate.latitude, Axis::Latitude);
    let longitude = deg_to_dms(coordinate.longitude, Axis::Longitude);

    payload.insert(TagId::GpsLatitudeRef, ascii(latitude.reference));
    payload.insert(TagId::GpsLatitude, TagValue::Rational(latitude.rationals()));
    payload.insert(TagId::GpsLongitudeRef, ascii(longitude.reference));
    payload.insert(TagId::GpsLongitude, TagValue::Rational(longitude.rationals()));
}

fn insert_timestamp(payload: &mut ExifPayload, ts: &ExifTimestamp) {
    for tag in [
        TagId::DateTime,
        TagId::DateTimeOriginal,
        TagId::DateTimeDigitized,
    ] {
        payload.insert(tag, ascii(&ts.datetime));
    }
    for tag in [
        TagId::SubSecTime,
        TagId::SubSecTimeOriginal,
        TagId::SubSecTimeDigitized,
    ] {
        payload.insert(tag, ascii(&ts.subsec));
    }
    for tag in [
        TagId::OffsetTime,
        TagId::OffsetTimeOriginal,
        TagId::OffsetTimeDigitized,
    ] {
        payload.insert(tag, ascii(&ts.offset));
    }
    payload.insert(TagId::GpsDateStamp, ascii(&ts.gps_date));
    payload.insert(TagId::GpsTimeStamp, TagValue::Rational(ts.gps_time.to_vec()));
}

fn insert_camera(payload: &mut ExifPayload, camera: &CameraProfile) {
    payload.insert(TagId::Make, ascii(&camera.make));
    payload.insert(TagId::Model, ascii(&camera.model));
    payload.insert(TagId::Software, ascii(&camera.software));
    payload.insert(TagId::ImageDescription, ascii(&camera.description));
    payload.insert(
        TagId::ExposureTime,
        TagValue::Rational(vec![camera.exposure_time]),
    );
    payload.insert(TagId::FNumber, TagValue::Rational(vec![camera.f_number]));
    payload.insert(TagId::Iso, TagValue::Short(vec![camera.iso]));
    payload.insert(
        TagId::FocalLength,
        TagValue::Rational(vec![camera.focal_length]),
    );
    payload.insert(TagId::ColorSpace, TagValue::Short(vec![camera.color_space]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::structs::{Ifd, Rational};
    use crate::time::format_timestamp;
    use chrono::{FixedOffset, TimeZone};

    fn sample_timestamp() -> ExifTimestamp {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = offset
            .with_ymd_and_hms(2024, 3, 15, 14, 30, 45)
            .single()
            .unwrap();
        format_timestamp(local)
    }

    #[test]
    fn test_gps_only_payload() {
        let coordinate = Coordinate::new(40.4168, -3.7038).unwrap();
        let payload = assemble_payload(coordinate, None, None);

        assert_eq!(payload.len(), 4);
        assert_eq!(payload.block(Ifd::Gps).count(), 4);
        assert_eq!(
            payload.get(TagId::GpsLatitudeRef),
            Some(&TagValue::Ascii("N".to_string()))
        );
        assert_eq!(
            payload.get(TagId::GpsLongitudeRef),
            Some(&TagValue::Ascii("W".to_string()))
        );
        let Some(TagValue::Rational(lat)) = payload.get(TagId::GpsLatitude) else {
            panic!("latitude should be rationals");
        };
        assert_eq!(lat[0], Rational::whole(40));
        assert_eq!(lat[1], Rational::whole(25));
        assert!(!payload.contains(TagId::GpsDateStamp));
        assert!(!payload.contains(TagId::Make));
    }

    #[test]
    fn test_full_payload_has_every_block() {
        let coordinate = Coordinate::new(-33.8688, 151.2093).unwrap();
        let ts = sample_timestamp();
        let camera = CameraProfile::default();
        let payload = assemble_payload(coordinate, Some(&ts), Some(&camera));

        assert_eq!(payload.block(Ifd::Zeroth).count(), 5);
        assert_eq!(payload.block(Ifd::Exif).count(), 13);
        assert_eq!(payload.block(Ifd::Gps).count(), 6);

        assert_eq!(
            payload.get(TagId::GpsLatitudeRef),
            Some(&TagValue::Ascii("S".to_string()))
        );
        assert_eq!(
            payload.get(TagId::DateTimeOriginal),
            Some(&TagValue::Ascii("2024:03:15 14:30:45".to_string()))
        );
        assert_eq!(
            payload.get(TagId::OffsetTimeOriginal),
            Some(&TagValue::Ascii("+01:00".to_string()))
        );
        assert_eq!(
            payload.get(TagId::GpsDateStamp),
            Some(&TagValue::Ascii("2024:03:15".to_string()))
        );
        assert_eq!(
            payload.get(TagId::GpsTimeStamp),
            Some(&TagValue::Rational(vec![
                Rational::whole(13),
                Rational::whole(30),
                Rational::whole(45)
            ]))
        );
        assert_eq!(payload.get(TagId::Iso), Some(&TagValue::Short(vec![100])));
        assert_eq!(
            payload.get(TagId::Make),
            Some(&TagValue::Ascii(camera.make.clone()))
        );
    }

    #[test]
    fn test_timestamp_without_camera() {
        let coordinate = Coordinate::new(1.0, 1.0).unwrap();
        let ts = sample_timestamp();
        let payload = assemble_payload(coordinate, Some(&ts), None);

        assert!(payload.contains(TagId::GpsTimeStamp));
        assert!(payload.contains(TagId::DateTime));
        assert!(!payload.contains(TagId::Model));
        assert!(!payload.contains(TagId::ExposureTime));
    }
}
