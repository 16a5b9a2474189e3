use super::structs::TagId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifError {
    #[error("Tag {tag:?} (0x{:04x}) expects {expected} values but got {found}", .tag.code())]
    TypeMismatch {
        tag: TagId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Tag {tag:?} (0x{:04x}) expects {expected} value(s) but got {found}", .tag.code())]
    WrongCount {
        tag: TagId,
        expected: usize,
        found: usize,
    },

    #[error("Tag {0:?} holds a rational with a zero denominator")]
    ZeroDenominator(TagId),

    #[error("Tag {0:?} holds text that is not NUL-free ASCII")]
    NotAscii(TagId),

    #[error("EXIF encoder failed: {0}")]
    Encoder(String),

    #[error("EXIF encoder output does not start with a TIFF header")]
    MalformedSegment,
}
