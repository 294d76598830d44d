mod handwriting;
mod health;
mod lessons;
mod speech;
mod upload;

pub use handwriting::assess_handwriting_handler;
pub use health::health_handler;
pub use lessons::{create_lesson_handler, get_lesson_handler};
pub use speech::assess_speech_handler;
pub use upload::upload_lesson_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::AssessmentError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps the assessment error taxonomy onto HTTP statuses, keeping the
/// client-caused / provider-caused distinction visible to the caller.
pub(crate) fn assessment_error_response(e: &AssessmentError) -> Response {
    let status = match e {
        AssessmentError::InvalidMedia(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentError::LessonNotFound(_) => StatusCode::NOT_FOUND,
        AssessmentError::Upstream { .. } | AssessmentError::MalformedResponse(_) => {
            StatusCode::BAD_GATEWAY
        }
        AssessmentError::Cancelled | AssessmentError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
