use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataUrlError {
    #[error("Unsupported media type in data URL: {0}")]
    UnsupportedMediaType(String),

    #[error("Data URL is missing the ';base64,' marker")]
    NotBase64,

    #[error("Image payload is empty")]
    Empty,

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Could not encode JPEG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("JPEG encoder rejected the EXIF segment: {0}")]
    ExifRejected(#[source] image::error::UnsupportedError),
}
