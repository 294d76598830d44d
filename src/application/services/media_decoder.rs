use base64::{engine::general_purpose, Engine as _};

/// Decodes a base64 transport payload into raw media bytes.
///
/// Strict standard-alphabet decoding; an empty result is rejected so that
/// downstream steps never see a zero-byte submission. Pure, no I/O.
pub fn decode_media(payload: &str) -> Result<Vec<u8>, MediaDecodeError> {
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| MediaDecodeError::InvalidEncoding(e.to_string()))?;

    if bytes.is_empty() {
        return Err(MediaDecodeError::Empty);
    }

    Ok(bytes)
}

#[derive(Debug, thiserror::Error)]
pub enum MediaDecodeError {
    #[error("invalid base64: {0}")]
    InvalidEncoding(String),
    #[error("payload decoded to zero bytes")]
    Empty,
}
