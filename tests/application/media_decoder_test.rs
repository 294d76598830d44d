use base64::{engine::general_purpose, Engine as _};

use stavern::application::services::{decode_media, MediaDecodeError};

#[test]
fn given_encoded_bytes_when_decoded_then_round_trips() {
    let original = b"\x89PNG\r\n\x1a\n not really a png";
    let encoded = general_purpose::STANDARD.encode(original);

    let decoded = decode_media(&encoded).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn given_empty_payload_when_decoded_then_fails() {
    let result = decode_media("");

    assert!(matches!(result, Err(MediaDecodeError::Empty)));
}

#[test]
fn given_garbage_payload_when_decoded_then_fails_with_invalid_encoding() {
    let result = decode_media("this is !!! not base64");

    assert!(matches!(result, Err(MediaDecodeError::InvalidEncoding(_))));
}

#[test]
fn given_unpadded_payload_when_decoded_then_fails_with_invalid_encoding() {
    // STANDARD requires padding; "YWJj" is "abc", "YWJjZA" lacks its "==".
    let result = decode_media("YWJjZA");

    assert!(matches!(result, Err(MediaDecodeError::InvalidEncoding(_))));
}
