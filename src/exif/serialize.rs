//! Encoding an [`ExifPayload`] into a binary EXIF (TIFF) blob with `little_exif`.

use super::error::ExifError;
use super::structs::{ExifPayload, Rational, TagId, TagValue};
use little_exif::exif_tag::ExifTag;
use little_exif::filetype::FileExtension;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;

/// `FF E1` marker, two length bytes, then `Exif\0\0`.
const APP1_HEADER_SIZE: usize = 10;

/// Checks that every value fits the type and count of its slot.
pub fn validate_payload(payload: &ExifPayload) -> Result<(), ExifError> {
    payload
        .iter()
        .try_for_each(|(tag, value)| validate_value(tag, value))
}

fn validate_value(tag: TagId, value: &TagValue) -> Result<(), ExifError> {
    let expected = tag.kind();
    if value.kind() != expected {
        return Err(ExifError::TypeMismatch {
            tag,
            expected: expected.name(),
            found: value.kind().name(),
        });
    }
    if let Some(count) = tag.count()
        && value.len() != count
    {
        return Err(ExifError::WrongCount {
            tag,
            expected: count,
            found: value.len(),
        });
    }
    match value {
        TagValue::Ascii(s) if !s.is_ascii() || s.contains('\0') => Err(ExifError::NotAscii(tag)),
        TagValue::Rational(values) if values.iter().any(|r| r.denominator == 0) => {
            Err(ExifError::ZeroDenominator(tag))
        }
        _ => Ok(()),
    }
}

fn to_ur64(values: &[Rational]) -> Vec<uR64> {
    values
        .iter()
        .map(|r| uR64 {
            nominator: r.numerator,
            denominator: r.denominator,
        })
        .collect()
}

/// Maps a validated slot onto the encoder's tag type.
fn to_exif_tag(tag: TagId, value: &TagValue) -> Result<ExifTag, ExifError> {
    let exif_tag = match (tag, value) {
        (TagId::ImageDescription, TagValue::Ascii(s)) => ExifTag::ImageDescription(s.clone()),
        (TagId::Make, TagValue::Ascii(s)) => ExifTag::Make(s.clone()),
        (TagId::Model, TagValue::Ascii(s)) => ExifTag::Model(s.clone()),
        (TagId::Software, TagValue::Ascii(s)) => ExifTag::Software(s.clone()),
        (TagId::DateTime, TagValue::Ascii(s)) => ExifTag::ModifyDate(s.clone()),
        (TagId::ExposureTime, TagValue::Rational(v)) => ExifTag::ExposureTime(to_ur64(v)),
        (TagId::FNumber, TagValue::Rational(v)) => ExifTag::FNumber(to_ur64(v)),
        (TagId::Iso, TagValue::Short(v)) => ExifTag::ISO(v.clone()),
        (TagId::DateTimeOriginal, TagValue::Ascii(s)) => ExifTag::DateTimeOriginal(s.clone()),
        (TagId::DateTimeDigitized, TagValue::Ascii(s)) => ExifTag::CreateDate(s.clone()),
        (TagId::OffsetTime, TagValue::Ascii(s)) => ExifTag::OffsetTime(s.clone()),
        (TagId::OffsetTimeOriginal, TagValue::Ascii(s)) => ExifTag::OffsetTimeOriginal(s.clone()),
        (TagId::OffsetTimeDigitized, TagValue::Ascii(s)) => {
            ExifTag::OffsetTimeDigitized(s.clone())
        }
        (TagId::FocalLength, TagValue::Rational(v)) => ExifTag::FocalLength(to_ur64(v)),
        (TagId::SubSecTime, TagValue::Ascii(s)) => ExifTag::SubSecTime(s.clone()),
        (TagId::SubSecTimeOriginal, TagValue::Ascii(s)) => ExifTag::SubSecTimeOriginal(s.clone()),
        (TagId::SubSecTimeDigitized, TagValue::Ascii(s)) => {
            ExifTag::SubSecTimeDigitized(s.clone())
        }
        (TagId::ColorSpace, TagValue::Short(v)) => ExifTag::ColorSpace(v.clone()),
        (TagId::GpsLatitudeRef, TagValue::Ascii(s)) => ExifTag::GPSLatitudeRef(s.clone()),
        (TagId::GpsLatitude, TagValue::Rational(v)) => ExifTag::GPSLatitude(to_ur64(v)),
        (TagId::GpsLongitudeRef, TagValue::Ascii(s)) => ExifTag::GPSLongitudeRef(s.clone()),
        (TagId::GpsLongitude, TagValue::Rational(v)) => ExifTag::GPSLongitude(to_ur64(v)),
        (TagId::GpsTimeStamp, TagValue::Rational(v)) => ExifTag::GPSTimeStamp(to_ur64(v)),
        (TagId::GpsDateStamp, TagValue::Ascii(s)) => ExifTag::GPSDateStamp(s.clone()),
        (tag, value) => {
            return Err(ExifError::TypeMismatch {
                tag,
                expected: tag.kind().name(),
                found: value.kind().name(),
            });
        }
    };
    Ok(exif_tag)
}

/// Serializes the payload into a TIFF-structured EXIF blob.
///
/// The blob starts at the TIFF byte-order mark (`II`/`MM`), without the
/// `Exif\0\0` identifier, ready to be placed in a JPEG APP1 segment.
///
/// # Errors
///
/// Returns an [`ExifError`] if any value does not fit its slot or the
/// encoder fails.
pub fn serialize_payload(payload: &ExifPayload) -> Result<Vec<u8>, ExifError> {
    validate_payload(payload)?;

    let mut metadata = Metadata::new();
    for (tag, value) in payload.iter() {
        metadata.set_tag(to_exif_tag(tag, value)?);
    }

    // little_exif emits a whole APP1 segment; the JPEG encoder adds its own header
    let app1 = metadata
        .as_u8_vec(FileExtension::JPEG)
        .map_err(|e| ExifError::Encoder(format!("{e:?}")))?;
    match app1.get(APP1_HEADER_SIZE..) {
        Some(tiff) if tiff.starts_with(b"II") || tiff.starts_with(b"MM") => Ok(tiff.to_vec()),
        _ => Err(ExifError::MalformedSegment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::assembler::assemble_payload;
    use crate::exif::catalog::CameraProfile;
    use crate::gps::Coordinate;
    use crate::time::format_timestamp;
    use chrono::{FixedOffset, TimeZone};
    use kamadak_exif::{In, Reader, Tag, Value};

    fn read_ascii(exif: &kamadak_exif::Exif, tag: Tag) -> String {
        let field = exif.get_field(tag, In::PRIMARY).expect("tag present");
        match &field.value {
            Value::Ascii(parts) => String::from_utf8_lossy(&parts[0]).into_owned(),
            other => panic!("expected ascii for {tag}, got {other:?}"),
        }
    }

    fn read_rationals(exif: &kamadak_exif::Exif, tag: Tag) -> Vec<(u32, u32)> {
        let field = exif.get_field(tag, In::PRIMARY).expect("tag present");
        match &field.value {
            Value::Rational(values) => values.iter().map(|r| (r.num, r.denom)).collect(),
            other => panic!("expected rationals for {tag}, got {other:?}"),
        }
    }

    #[test]
    fn test_gps_blob_is_readable() {
        let coordinate = Coordinate::new(40.4168, -3.7038).unwrap();
        let payload = assemble_payload(coordinate, None, None);
        let blob = serialize_payload(&payload).unwrap();

        assert!(blob.starts_with(b"II") || blob.starts_with(b"MM"));
        let exif = Reader::new().read_raw(blob).unwrap();

        assert_eq!(read_ascii(&exif, Tag::GPSLatitudeRef), "N");
        assert_eq!(read_ascii(&exif, Tag::GPSLongitudeRef), "W");
        let lat = read_rationals(&exif, Tag::GPSLatitude);
        assert_eq!(lat[0], (40, 1));
        assert_eq!(lat[1], (25, 1));
        assert_eq!(lat[2].1, 100);
        let lon = read_rationals(&exif, Tag::GPSLongitude);
        assert_eq!(lon[0], (3, 1));
        assert_eq!(lon[1], (42, 1));
    }

    #[test]
    fn test_full_blob_is_readable() {
        let coordinate = Coordinate::new(51.5007, -0.1246).unwrap();
        let local = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 15, 14, 30, 45)
            .single()
            .unwrap();
        let ts = format_timestamp(local);
        let camera = CameraProfile::default();
        let payload = assemble_payload(coordinate, Some(&ts), Some(&camera));
        let blob = serialize_payload(&payload).unwrap();
        let exif = Reader::new().read_raw(blob).unwrap();

        assert_eq!(read_ascii(&exif, Tag::Make), camera.make);
        assert_eq!(read_ascii(&exif, Tag::Model), camera.model);
        assert_eq!(read_ascii(&exif, Tag::DateTimeOriginal), "2024:03:15 14:30:45");
        assert_eq!(read_ascii(&exif, Tag::GPSDateStamp), "2024:03:15");
        assert_eq!(
            read_rationals(&exif, Tag::GPSTimeStamp),
            vec![(13, 1), (30, 1), (45, 1)]
        );
        assert_eq!(read_rationals(&exif, Tag::FNumber), vec![(185, 100)]);
        let iso = exif
            .get_field(Tag::PhotographicSensitivity, In::PRIMARY)
            .expect("ISO present");
        assert_eq!(iso.value.get_uint(0), Some(100));
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        let mut payload = ExifPayload::new();
        payload.insert(
            TagId::FNumber,
            TagValue::Rational(vec![Rational::new(28, 0)]),
        );
        assert!(matches!(
            serialize_payload(&payload),
            Err(ExifError::ZeroDenominator(TagId::FNumber))
        ));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut payload = ExifPayload::new();
        payload.insert(TagId::Iso, TagValue::Ascii("100".to_string()));
        assert!(matches!(
            serialize_payload(&payload),
            Err(ExifError::TypeMismatch {
                tag: TagId::Iso,
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_count_is_rejected() {
        let mut payload = ExifPayload::new();
        payload.insert(
            TagId::GpsLatitude,
            TagValue::Rational(vec![Rational::whole(1), Rational::whole(2)]),
        );
        assert!(matches!(
            validate_payload(&payload),
            Err(ExifError::WrongCount {
                expected: 3,
                found: 2,
                ..
            })
        ));

        let mut payload = ExifPayload::new();
        payload.insert(TagId::GpsLatitudeRef, TagValue::Ascii("NS".to_string()));
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        let mut payload = ExifPayload::new();
        payload.insert(TagId::Make, TagValue::Ascii("Café".to_string()));
        assert!(matches!(
            validate_payload(&payload),
            Err(ExifError::NotAscii(TagId::Make))
        ));
    }
}
