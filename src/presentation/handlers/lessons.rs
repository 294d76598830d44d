use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::InferenceClient;
use crate::domain::Lesson;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CreateLessonRequest {
    pub id: i64,
    pub words: Vec<String>,
    pub metadata: Option<String>,
}

#[derive(Serialize)]
pub struct LessonResponse {
    pub id: i64,
    pub words: Vec<String>,
    pub metadata: Option<String>,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            words: lesson.words,
            metadata: lesson.metadata,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn create_lesson_handler<I>(
    State(state): State<AppState<I>>,
    Json(request): Json<CreateLessonRequest>,
) -> impl IntoResponse
where
    I: InferenceClient + 'static,
{
    if request.words.iter().any(|w| w.trim().is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Lesson words must be non-empty".to_string(),
            }),
        )
            .into_response();
    }

    let lesson = Lesson::new(request.id, request.words, request.metadata);

    match state.lesson_repository.put(lesson.clone()).await {
        Ok(()) => {
            tracing::info!(lesson_id = lesson.id, word_count = lesson.words.len(), "Lesson stored");
            (StatusCode::OK, Json(LessonResponse::from(lesson))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store lesson");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to store lesson: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_lesson_handler<I>(
    State(state): State<AppState<I>>,
    Path(id): Path<i64>,
) -> impl IntoResponse
where
    I: InferenceClient + 'static,
{
    match state.lesson_repository.get(id).await {
        Ok(Some(lesson)) => (StatusCode::OK, Json(LessonResponse::from(lesson))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Lesson {} not found", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Lesson lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Lesson lookup failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
