use crate::GeostampError;
use crate::exif::{CameraProfile, ExifPayload, assemble_payload, serialize_payload};
use crate::features::codec::{DEFAULT_JPEG_QUALITY, decode_image, encode_jpeg};
use crate::gps::{
    Coordinate, DEFAULT_JITTER_RADIUS_M, haversine_distance_m, jitter_coordinate, validate_radius,
};
use crate::time::{OffsetSource, format_timestamp};
use bon::bon;
use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;
use tracing::debug;

/// The stamping pipeline: jitter, build EXIF, re-encode, embed.
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent requests.
///
/// Use the builder pattern to construct an instance:
/// ```rust
/// # use geostamp::{GeoStamper, GeostampError};
/// # fn main() -> Result<(), GeostampError> {
/// let stamper = GeoStamper::builder()
///     .jitter_radius_m(5.0) // Optionally configure parameters
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeoStamper {
    include_capture_metadata: bool,
    apply_jitter: bool,
    jitter_radius_m: f64,
    offset: OffsetSource,
    camera: CameraProfile,
    jpeg_quality: u8,
}

/// The outcome of stamping one photo.
#[derive(Debug, Clone)]
pub struct StampResult {
    /// JPEG bytes with the EXIF segment embedded.
    pub image: Vec<u8>,
    /// The coordinate written to the GPS tags, after jitter.
    pub coordinate: Coordinate,
    /// Capture time in the resolved local offset.
    pub captured_at: DateTime<FixedOffset>,
    /// Suggested file name derived from the capture time.
    pub filename: String,
}

#[bon]
impl GeoStamper {
    /// Constructs a `GeoStamper` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `include_capture_metadata: bool` - (Default: `true`) Write the device, exposure and date/time tags, plus the GPS UTC date and time. When `false`, only the GPS position is written.
    /// * `apply_jitter: bool` - (Default: `true`) Move the position to a random point within `jitter_radius_m` before stamping.
    /// * `jitter_radius_m: f64` - (Default: `2.0`) Jitter radius in meters.
    /// * `offset: OffsetSource` - (Default: fixed `+01:00`) Where the local time offset comes from.
    /// * `camera: CameraProfile` - (Default: [`CameraProfile::default`]) Device values written with the capture metadata.
    /// * `jpeg_quality: u8` - (Default: `75`) Quality of the re-encoded JPEG, `1..=100`.
    ///
    /// # Errors
    ///
    /// * [`GeostampError::InvalidCoordinate`] for a negative or non-finite radius.
    /// * [`GeostampError::InvalidInput`] for a JPEG quality outside `1..=100`.
    #[builder]
    pub fn new(
        #[builder(default = true)] include_capture_metadata: bool,
        #[builder(default = true)] apply_jitter: bool,
        #[builder(default = DEFAULT_JITTER_RADIUS_M)] jitter_radius_m: f64,
        #[builder(default)] offset: OffsetSource,
        #[builder(default)] camera: CameraProfile,
        #[builder(default = DEFAULT_JPEG_QUALITY)] jpeg_quality: u8,
    ) -> Result<Self, GeostampError> {
        let jitter_radius_m = validate_radius(jitter_radius_m)?;
        if !(1..=100).contains(&jpeg_quality) {
            return Err(GeostampError::InvalidInput(format!(
                "JPEG quality must be between 1 and 100, got {jpeg_quality}"
            )));
        }
        Ok(Self {
            include_capture_metadata,
            apply_jitter,
            jitter_radius_m,
            offset,
            camera,
            jpeg_quality,
        })
    }

    pub const fn offset(&self) -> OffsetSource {
        self.offset
    }

    pub const fn jitter_radius_m(&self) -> f64 {
        self.jitter_radius_m
    }

    pub const fn applies_jitter(&self) -> bool {
        self.apply_jitter
    }

    /// Builds the tag blocks for `coordinate` taken at `local` time.
    pub fn build_payload(&self, coordinate: Coordinate, local: DateTime<FixedOffset>) -> ExifPayload {
        if self.include_capture_metadata {
            let timestamp = format_timestamp(local);
            assemble_payload(coordinate, Some(&timestamp), Some(&self.camera))
        } else {
            assemble_payload(coordinate, None, None)
        }
    }

    /// Stamps a photo taken at `coordinate` and `captured_at`.
    ///
    /// `image` may be any format the decoder understands; the output is
    /// always JPEG. `rng` drives the jitter; pass a seeded generator for
    /// reproducible output.
    ///
    /// # Errors
    ///
    /// * [`GeostampError::ImageDecode`]: `image` is not a decodable image.
    /// * [`GeostampError::InvalidCoordinate`]: jitter was requested at a pole.
    /// * [`GeostampError::Time`]: the UTC offset could not be resolved.
    /// * [`GeostampError::Serialization`]: a tag value did not fit its slot.
    /// * [`GeostampError::ImageEncode`]: JPEG encoding or embedding failed.
    pub fn stamp<R: Rng + ?Sized>(
        &self,
        image: &[u8],
        coordinate: Coordinate,
        captured_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<StampResult, GeostampError> {
        let decoded = decode_image(image)?;

        let stamped = if self.apply_jitter {
            let jittered = jitter_coordinate(coordinate, self.jitter_radius_m, rng)?;
            debug!(
                displacement_m = haversine_distance_m(coordinate, jittered),
                "applied positional jitter"
            );
            jittered
        } else {
            coordinate
        };

        // The zone lookup uses the true position; jitter never crosses a border that matters
        let local = self.offset.localize(captured_at, coordinate)?;
        debug!(offset = %local.offset(), "resolved capture offset");

        let payload = self.build_payload(stamped, local);
        let blob = serialize_payload(&payload)?;
        let image = encode_jpeg(&decoded, self.jpeg_quality, Some(blob))?;

        Ok(StampResult {
            image,
            coordinate: stamped,
            captured_at: local,
            filename: output_filename(local),
        })
    }
}

/// `IMG_YYYYMMDD_HHMMSS.jpg` for a local capture time.
pub fn output_filename(local: DateTime<FixedOffset>) -> String {
    format!("IMG_{}.jpg", local.format("%Y%m%d_%H%M%S"))
}
