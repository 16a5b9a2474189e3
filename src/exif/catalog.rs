use super::structs::Rational;

/// `ColorSpace` value for sRGB.
pub const COLOR_SPACE_SRGB: u16 = 1;

/// Fixed device and exposure values written alongside the capture time.
///
/// These are not measured from the image; they describe the device the
/// stamped photos should appear to come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraProfile {
    pub make: String,
    pub model: String,
    pub software: String,
    pub description: String,
    pub exposure_time: Rational,
    pub f_number: Rational,
    pub iso: u16,
    pub focal_length: Rational,
    pub color_space: u16,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            make: "Google".to_string(),
            model: "Pixel 7".to_string(),
            software: format!("geostamp {}", env!("CARGO_PKG_VERSION")),
            description: "Geotagged photo".to_string(),
            exposure_time: Rational::new(1, 120),
            f_number: Rational::new(185, 100),
            iso: 100,
            focal_length: Rational::new(681, 100),
            color_space: COLOR_SPACE_SRGB,
        }
    }
}
