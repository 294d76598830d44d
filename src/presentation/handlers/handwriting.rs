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
pub struct HandwritingSubmissionRequest {
    pub image_base64: String,
}

#[derive(Serialize)]
pub struct HandwritingAssessmentResponse {
    pub feedback: String,
}

/// Sends a handwriting sample to the provider for grading against the
/// lesson's target words.
#[tracing::instrument(skip(state, request))]
pub async fn assess_handwriting_handler<I>(
    State(state): State<AppState<I>>,
    Path(lesson_id): Path<i64>,
    Json(request): Json<HandwritingSubmissionRequest>,
) -> impl IntoResponse
where
    I: InferenceClient + 'static,
{
    let payload = MediaPayload {
        data: request.image_base64,
        kind: MediaKind::Image,
    };

    let cancel = state.shutdown.child_token();

    match state
        .assessment_service
        .assess_handwriting(lesson_id, &payload, &cancel)
        .await
    {
        Ok(AssessmentResult::Handwriting { feedback }) => (
            StatusCode::OK,
            Json(HandwritingAssessmentResponse { feedback }),
        )
            .into_response(),
        Ok(other) => {
            tracing::error!(result = ?other, "Unexpected assessment variant for handwriting");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Unexpected assessment result".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, lesson_id, "Handwriting assessment failed");
            assessment_error_response(&e)
        }
    }
}
