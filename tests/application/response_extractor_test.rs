use stavern::application::services::{
    extract_feedback, extract_transcript, extract_words, ExtractError,
};

fn chat_envelope(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"content": content}}]
    })
    .to_string()
}

#[test]
fn given_json_list_content_when_extracting_words_then_parses_strictly() {
    let raw = chat_envelope(r#"["sun","moon"]"#);

    let words = extract_words(&raw).unwrap();

    assert_eq!(words, vec!["sun", "moon"]);
}

#[test]
fn given_prose_content_when_extracting_words_then_splits_on_delimiters() {
    let raw = chat_envelope("sun, moon; star");

    let words = extract_words(&raw).unwrap();

    assert_eq!(words, vec!["sun", "moon", "star"]);
}

#[test]
fn given_newline_separated_content_when_extracting_words_then_splits_and_drops_empties() {
    let raw = chat_envelope("sun\r\nmoon\n\nstar");

    let words = extract_words(&raw).unwrap();

    assert_eq!(words, vec!["sun", "moon", "star"]);
}

#[test]
fn given_empty_content_when_extracting_words_then_returns_empty_list() {
    let raw = chat_envelope("");

    let words = extract_words(&raw).unwrap();

    assert!(words.is_empty());
}

#[test]
fn given_null_content_when_extracting_words_then_returns_empty_list() {
    let raw = r#"{"choices": [{"message": {"content": null}}]}"#;

    let words = extract_words(raw).unwrap();

    assert!(words.is_empty());
}

#[test]
fn given_valid_json_of_wrong_shape_when_extracting_words_then_falls_back_to_splitting() {
    // A JSON array of numbers parses as JSON but not as Vec<String>- any
    // strict-parse failure falls through to the delimiter split.
    let raw = chat_envelope("[1,2]");

    let words = extract_words(&raw).unwrap();

    assert_eq!(words, vec!["[1", "2]"]);
}

#[test]
fn given_body_without_choices_when_extracting_words_then_fails() {
    let result = extract_words(r#"{"choices": []}"#);

    assert!(matches!(result, Err(ExtractError::MalformedResponse(_))));
}

#[test]
fn given_non_json_body_when_extracting_words_then_fails() {
    let result = extract_words("upstream exploded");

    assert!(matches!(result, Err(ExtractError::MalformedResponse(_))));
}

#[test]
fn given_text_field_when_extracting_transcript_then_returns_it_verbatim() {
    let transcript = extract_transcript(r#"{"text": "  the sun  "}"#).unwrap();

    assert_eq!(transcript, "  the sun  ");
}

#[test]
fn given_null_text_field_when_extracting_transcript_then_returns_empty_string() {
    let transcript = extract_transcript(r#"{"text": null}"#).unwrap();

    assert_eq!(transcript, "");
}

#[test]
fn given_body_without_text_field_when_extracting_transcript_then_fails() {
    let result = extract_transcript(r#"{"transcript": "wrong key"}"#);

    assert!(matches!(result, Err(ExtractError::MalformedResponse(_))));
}

#[test]
fn given_chat_body_when_extracting_feedback_then_returns_content_verbatim() {
    let raw = chat_envelope("Well done! Watch the letter b.");

    let feedback = extract_feedback(&raw).unwrap();

    assert_eq!(feedback, "Well done! Watch the letter b.");
}
