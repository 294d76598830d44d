/// Outcome of comparing a learner's submission against a lesson.
///
/// Produced once per request; persistence is the lesson registry's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentResult {
    WordExtraction { words: Vec<String> },
    Speech { transcript: String, score: f32 },
    Handwriting { feedback: String },
}
