use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::InferenceClient;
use crate::domain::{AssessmentResult, MediaKind, MediaPayload};
use crate::presentation::handlers::{assessment_error_response, ErrorResponse};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SpeechSubmissionRequest {
    pub audio_base64: String,
}

#[derive(Serialize)]
pub struct SpeechAssessmentResponse {
    pub transcript: String,
    pub score: f32,
}

/// Transcribes a spoken practice recording and scores it against the
/// lesson's target words.
#[tracing::instrument(skip(state, request))]
pub async fn assess_speech_handler<I>(
    State(state): State<AppState<I>>,
    Path(lesson_id): Path<i64>,
    Json(request): Json<SpeechSubmissionRequest>,
) -> impl IntoResponse
where
    I: InferenceClient + 'static,
{
    let payload = MediaPayload {
        data: request.audio_base64,
        kind: MediaKind::Audio,
    };

    let cancel = state.shutdown.child_token();

    match state
        .assessment_service
        .assess_speech(lesson_id, &payload, &cancel)
        .await
    {
        Ok(AssessmentResult::Speech { transcript, score }) => (
            StatusCode::OK,
            Json(SpeechAssessmentResponse { transcript, score }),
        )
            .into_response(),
        Ok(other) => {
            tracing::error!(result = ?other, "Unexpected assessment variant for speech");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Unexpected assessment result".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, lesson_id, "Speech assessment failed");
            assessment_error_response(&e)
        }
    }
}
