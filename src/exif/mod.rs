//! EXIF tag model, payload assembly and binary serialization.
mod assembler;
pub mod catalog;
pub mod error;
mod serialize;
pub mod structs;

pub use assembler::assemble_payload;
pub use catalog::{COLOR_SPACE_SRGB, CameraProfile};
pub use error::ExifError;
pub use serialize::{serialize_payload, validate_payload};
pub use structs::{ExifPayload, Ifd, Rational, TagId, TagValue, ValueKind};
