/// Spelling-accuracy score: the fraction of target words that occur as a
/// case-insensitive substring of the transcript.
///
/// Each target word is checked independently; duplicates in the target list
/// each count on their own against the same transcript. An empty target list
/// scores exactly 0.0.
pub fn score_transcript(target_words: &[String], transcript: &str) -> f32 {
    if target_words.is_empty() {
        return 0.0;
    }

    let haystack = transcript.to_lowercase();
    let matched = target_words
        .iter()
        .filter(|word| haystack.contains(&word.to_lowercase()))
        .count();

    matched as f32 / target_words.len() as f32
}
