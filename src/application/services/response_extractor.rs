use serde::Deserialize;

/// Parsers for the two provider envelopes. An unrecognized envelope shape is
/// a hard failure; only the word-list content has a recovery path.

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Transcription {
    // Double Option separates an absent `text` field (malformed envelope)
    // from an explicit null (empty transcript).
    #[serde(default, deserialize_with = "nullable")]
    text: Option<Option<String>>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("provider response shape not recognized: {0}")]
    MalformedResponse(String),
}

const WORD_DELIMITERS: [char; 5] = [' ', ',', ';', '\n', '\r'];

/// Extracts a word list from a chat completion body.
///
/// The `content` string is itself provider output and is not guaranteed to be
/// valid JSON. Fallback order, exactly: (1) strict parse as a JSON array of
/// strings, (2) split on space/comma/semicolon/newline/carriage-return and
/// drop empty tokens, (3) empty list only when content is null or empty.
/// Any strict-parse failure falls to the delimiter split, including valid
/// JSON of the wrong shape.
pub fn extract_words(raw: &str) -> Result<Vec<String>, ExtractError> {
    let content = chat_content(raw)?;

    let content = content.trim();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(words) = serde_json::from_str::<Vec<String>>(content) {
        return Ok(words);
    }

    Ok(content
        .split(&WORD_DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}

/// Extracts the transcript from a transcription body. A present-but-null
/// `text` field yields an empty string.
pub fn extract_transcript(raw: &str) -> Result<String, ExtractError> {
    let transcription: Transcription = serde_json::from_str(raw)
        .map_err(|e| ExtractError::MalformedResponse(format!("transcription envelope: {e}")))?;

    let text = transcription
        .text
        .ok_or_else(|| ExtractError::MalformedResponse("missing text field".to_string()))?;

    Ok(text.unwrap_or_default())
}

/// Extracts the assistant's feedback text from a chat completion body,
/// verbatim.
pub fn extract_feedback(raw: &str) -> Result<String, ExtractError> {
    chat_content(raw)
}

fn chat_content(raw: &str) -> Result<String, ExtractError> {
    let completion: ChatCompletion = serde_json::from_str(raw)
        .map_err(|e| ExtractError::MalformedResponse(format!("chat envelope: {e}")))?;

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::MalformedResponse("empty choices array".to_string()))?;

    Ok(choice.message.content.unwrap_or_default())
}
