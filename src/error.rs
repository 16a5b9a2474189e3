use crate::features::error::{CodecError, DataUrlError};
use thiserror::Error;

/// The primary error type for the geostamp crate.
#[derive(Error, Debug)]
pub enum GeostampError {
    // --- Client errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] crate::gps::GpsError),

    // --- Processing errors ---
    #[error("Image decoding failed: {0}")]
    ImageDecode(#[source] CodecError),

    #[error("Image encoding failed: {0}")]
    ImageEncode(#[source] CodecError),

    #[error("EXIF serialization failed: {0}")]
    Serialization(#[from] crate::exif::ExifError),

    #[error("Time conversion failed: {0}")]
    Time(#[from] crate::time::TimeError),
}

impl GeostampError {
    /// Stable machine-readable code for this error.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidCoordinate(_) => "invalid_coordinate",
            Self::ImageDecode(_) => "image_decode",
            Self::ImageEncode(_) => "image_encode",
            Self::Serialization(_) => "serialization",
            Self::Time(_) => "time",
        }
    }

    /// Whether the caller, rather than the service, is at fault.
    /// Client errors map to 4xx responses, everything else to 500.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidCoordinate(_))
    }
}

impl From<DataUrlError> for GeostampError {
    fn from(err: DataUrlError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<CodecError> for GeostampError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode(_) => Self::ImageDecode(err),
            CodecError::Encode(_) | CodecError::ExifRejected(_) => Self::ImageEncode(err),
        }
    }
}
