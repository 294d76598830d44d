use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    InferenceClient, InferenceClientError, InferenceKind, InferenceRequest, LessonRepository,
    RepositoryError,
};
use crate::application::services::{
    decode_media, extract_feedback, extract_transcript, extract_words, score_transcript,
    ExtractError, MediaDecodeError,
};
use crate::domain::{AssessmentResult, Lesson, MediaPayload};

const EXTRACT_INSTRUCTIONS: &str = "You are an OCR assistant. Extract every word \
visible in the image and respond with a JSON array of strings, nothing else.";

/// Turns a raw media submission into a verified, scored outcome.
///
/// Strictly linear per request: validate, decode, build the provider request,
/// invoke once, extract, post-process. Every failure is terminal; nothing is
/// retried and no partial result is returned.
pub struct AssessmentService<I>
where
    I: InferenceClient,
{
    lesson_repository: Arc<dyn LessonRepository>,
    inference_client: Arc<I>,
    max_tokens: u32,
}

impl<I> AssessmentService<I>
where
    I: InferenceClient,
{
    pub fn new(
        lesson_repository: Arc<dyn LessonRepository>,
        inference_client: Arc<I>,
        max_tokens: u32,
    ) -> Self {
        Self {
            lesson_repository,
            inference_client,
            max_tokens,
        }
    }

    /// Reads a word list off an uploaded image. No lesson involved.
    #[tracing::instrument(skip(self, payload, cancel))]
    pub async fn extract_words(
        &self,
        payload: &MediaPayload,
        cancel: &CancellationToken,
    ) -> Result<AssessmentResult, AssessmentError> {
        let media = decode_media(&payload.data)?;

        let request = InferenceRequest {
            kind: InferenceKind::VisionExtract,
            instructions: EXTRACT_INSTRUCTIONS.to_string(),
            media,
            media_mime: payload.kind.as_mime().to_string(),
            max_tokens: self.max_tokens,
        };

        let raw = self.inference_client.invoke(request, cancel).await?;
        let words = extract_words(&raw)?;

        tracing::info!(word_count = words.len(), "Word extraction completed");

        Ok(AssessmentResult::WordExtraction { words })
    }

    /// Transcribes a spoken submission and scores it against the lesson's
    /// target words.
    #[tracing::instrument(skip(self, payload, cancel))]
    pub async fn assess_speech(
        &self,
        lesson_id: i64,
        payload: &MediaPayload,
        cancel: &CancellationToken,
    ) -> Result<AssessmentResult, AssessmentError> {
        let lesson = self.require_lesson(lesson_id).await?;
        let media = decode_media(&payload.data)?;

        let request = InferenceRequest {
            kind: InferenceKind::Transcribe,
            instructions: String::new(),
            media,
            media_mime: payload.kind.as_mime().to_string(),
            max_tokens: self.max_tokens,
        };

        let raw = self.inference_client.invoke(request, cancel).await?;
        let transcript = extract_transcript(&raw)?;
        let score = score_transcript(&lesson.words, &transcript);

        tracing::info!(lesson_id, score, "Speech assessment completed");

        Ok(AssessmentResult::Speech { transcript, score })
    }

    /// Asks the provider to grade a handwriting sample against the lesson's
    /// target words and returns its feedback text.
    #[tracing::instrument(skip(self, payload, cancel))]
    pub async fn assess_handwriting(
        &self,
        lesson_id: i64,
        payload: &MediaPayload,
        cancel: &CancellationToken,
    ) -> Result<AssessmentResult, AssessmentError> {
        let lesson = self.require_lesson(lesson_id).await?;
        let media = decode_media(&payload.data)?;

        let request = InferenceRequest {
            kind: InferenceKind::VisionGrade,
            instructions: grading_instructions(&lesson),
            media,
            media_mime: payload.kind.as_mime().to_string(),
            max_tokens: self.max_tokens,
        };

        let raw = self.inference_client.invoke(request, cancel).await?;
        let feedback = extract_feedback(&raw)?;

        tracing::info!(lesson_id, "Handwriting assessment completed");

        Ok(AssessmentResult::Handwriting { feedback })
    }

    async fn require_lesson(&self, lesson_id: i64) -> Result<Lesson, AssessmentError> {
        self.lesson_repository
            .get(lesson_id)
            .await?
            .ok_or(AssessmentError::LessonNotFound(lesson_id))
    }
}

fn grading_instructions(lesson: &Lesson) -> String {
    format!(
        "The learner was asked to write the following words: {}. Review the \
handwriting in the image and give short, encouraging feedback on spelling \
and letter formation.",
        lesson.words.join(", ")
    )
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid media payload: {0}")]
    InvalidMedia(#[from] MediaDecodeError),
    #[error("lesson {0} not found")]
    LessonNotFound(i64),
    #[error("inference provider failed with status {status_code}: {detail}")]
    Upstream { status_code: u16, detail: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(ExtractError),
    #[error("assessment cancelled")]
    Cancelled,
    #[error("lesson lookup failed: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<InferenceClientError> for AssessmentError {
    fn from(e: InferenceClientError) -> Self {
        match e {
            InferenceClientError::Upstream {
                status_code,
                detail,
            } => Self::Upstream {
                status_code,
                detail,
            },
            InferenceClientError::Cancelled => Self::Cancelled,
        }
    }
}

impl From<ExtractError> for AssessmentError {
    fn from(e: ExtractError) -> Self {
        Self::MalformedResponse(e)
    }
}
