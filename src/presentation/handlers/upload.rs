use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::InferenceClient;
use crate::domain::{AssessmentResult, MediaKind, MediaPayload};
use crate::presentation::handlers::{assessment_error_response, ErrorResponse};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct UploadLessonRequest {
    pub image_base64: String,
}

#[derive(Serialize)]
pub struct UploadLessonResponse {
    pub words: Vec<String>,
}

/// Reads the word list off a photographed handwritten lesson sheet.
#[tracing::instrument(skip(state, request))]
pub async fn upload_lesson_handler<I>(
    State(state): State<AppState<I>>,
    Json(request): Json<UploadLessonRequest>,
) -> impl IntoResponse
where
    I: InferenceClient + 'static,
{
    let payload = MediaPayload {
        data: request.image_base64,
        kind: MediaKind::Image,
    };

    let cancel = state.shutdown.child_token();

    match state.assessment_service.extract_words(&payload, &cancel).await {
        Ok(AssessmentResult::WordExtraction { words }) => {
            (StatusCode::OK, Json(UploadLessonResponse { words })).into_response()
        }
        Ok(other) => {
            tracing::error!(result = ?other, "Unexpected assessment variant for upload");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Unexpected assessment result".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Word extraction failed");
            assessment_error_response(&e)
        }
    }
}
