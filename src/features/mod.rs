pub mod codec;
pub mod data_url;
pub mod error;

pub use codec::{DEFAULT_JPEG_QUALITY, decode_image, encode_jpeg, guess_format};
pub use data_url::{decode_image_payload, encode_base64};
pub use error::{CodecError, DataUrlError};
