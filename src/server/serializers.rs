use crate::GeostampError;
use crate::features::decode_image_payload;
use crate::gps::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MSG_OK: &str = "Imagen procesada correctamente";
pub const MSG_INVALID_JSON: &str = "JSON inválido";
pub const MSG_MISSING_FIELDS: &str = "Faltan campos";

/// Accepts `40.4` as well as `"40.4"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn value(&self, field: &str) -> Result<f64, GeostampError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| GeostampError::InvalidInput(format!("{field} is not a number: {s:?}"))),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct StampIn {
    pub image_base64: Option<String>,
    pub latitude: Option<Numeric>,
    pub longitude: Option<Numeric>,
    pub captured_at: Option<String>,
}

/// A request that passed validation and is ready for the pipeline.
#[derive(Debug)]
pub struct StampRequest {
    pub image: Vec<u8>,
    pub coordinate: Coordinate,
    pub captured_at: DateTime<Utc>,
}

impl StampIn {
    /// Validates the body. `now` stands in for a missing `captured_at`.
    pub fn into_request(self, now: DateTime<Utc>) -> Result<StampRequest, GeostampError> {
        let (Some(image), Some(latitude), Some(longitude)) =
            (self.image_base64, self.latitude, self.longitude)
        else {
            return Err(GeostampError::InvalidInput(MSG_MISSING_FIELDS.to_string()));
        };

        let coordinate = Coordinate::new(latitude.value("latitude")?, longitude.value("longitude")?)
            .map_err(|e| GeostampError::InvalidInput(e.to_string()))?;

        let captured_at = match self.captured_at.as_deref().map(str::trim) {
            None | Some("") => now,
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map_err(|e| GeostampError::InvalidInput(format!("captured_at {raw:?}: {e}")))?
                .with_timezone(&Utc),
        };

        Ok(StampRequest {
            image: decode_image_payload(&image)?,
            coordinate,
            captured_at,
        })
    }
}

#[derive(Serialize, Debug)]
pub struct StampOut {
    pub status: &'static str,
    pub mensaje: &'static str,
    pub filename: String,
    pub image_base64: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorOut {
    pub status: &'static str,
    pub error: &'static str,
    pub mensaje: String,
}

#[derive(Serialize, Debug)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn parse(json: &str) -> StampIn {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let req = parse(r#"{"image_base64":"AAEC","latitude":"40.5","longitude":-3.25}"#)
            .into_request(now())
            .unwrap();
        assert_eq!(req.coordinate, Coordinate::new(40.5, -3.25).unwrap());
        assert_eq!(req.image, vec![0, 1, 2]);
        assert_eq!(req.captured_at, now());
    }

    #[test]
    fn test_missing_fields() {
        let err = parse(r#"{"latitude":1.0,"longitude":2.0}"#)
            .into_request(now())
            .unwrap_err();
        assert!(matches!(err, GeostampError::InvalidInput(ref m) if m == MSG_MISSING_FIELDS));
    }

    #[test]
    fn test_out_of_range_coordinate_is_invalid_input() {
        let err = parse(r#"{"image_base64":"AAEC","latitude":91,"longitude":0}"#)
            .into_request(now())
            .unwrap_err();
        assert!(matches!(err, GeostampError::InvalidInput(_)));

        let err = parse(r#"{"image_base64":"AAEC","latitude":"north","longitude":0}"#)
            .into_request(now())
            .unwrap_err();
        assert!(matches!(err, GeostampError::InvalidInput(_)));
    }

    #[test]
    fn test_captured_at_is_parsed_to_utc() {
        let req = parse(
            r#"{"image_base64":"AAEC","latitude":0,"longitude":0,"captured_at":"2024-03-15T14:30:45+01:00"}"#,
        )
        .into_request(now())
        .unwrap();
        assert_eq!(
            req.captured_at,
            Utc.with_ymd_and_hms(2024, 3, 15, 13, 30, 45).unwrap()
        );

        let err = parse(
            r#"{"image_base64":"AAEC","latitude":0,"longitude":0,"captured_at":"yesterday"}"#,
        )
        .into_request(now())
        .unwrap_err();
        assert!(matches!(err, GeostampError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_base64_is_invalid_input() {
        let err = parse(r#"{"image_base64":"%%%","latitude":0,"longitude":0}"#)
            .into_request(now())
            .unwrap_err();
        assert!(matches!(err, GeostampError::InvalidInput(_)));
    }
}
