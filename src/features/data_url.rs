use crate::features::error::DataUrlError;
use base64::{Engine as _, engine::general_purpose};

/// Decodes a base64 image payload, with or without a `data:image/...;base64,` prefix.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, DataUrlError> {
    let payload = payload.trim();
    let encoded = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (media_type, data) = rest.split_once(',').ok_or(DataUrlError::NotBase64)?;
            let mime = media_type
                .strip_suffix(";base64")
                .ok_or(DataUrlError::NotBase64)?;
            if !mime.starts_with("image/") {
                return Err(DataUrlError::UnsupportedMediaType(mime.to_string()));
            }
            data
        }
        None => payload,
    };
    if encoded.is_empty() {
        return Err(DataUrlError::Empty);
    }

    // Clients sometimes wrap long base64 at 76 columns
    let bytes = if encoded.contains(char::is_whitespace) {
        let compact: String = encoded.split_whitespace().collect();
        general_purpose::STANDARD.decode(compact)?
    } else {
        general_purpose::STANDARD.decode(encoded)?
    };
    if bytes.is_empty() {
        return Err(DataUrlError::Empty);
    }
    Ok(bytes)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
