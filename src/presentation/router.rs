use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::InferenceClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    assess_handwriting_handler, assess_speech_handler, create_lesson_handler, get_lesson_handler,
    health_handler, upload_lesson_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<I>(state: AppState<I>) -> Router
where
    I: InferenceClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/lessons", post(create_lesson_handler::<I>))
        .route("/api/lessons/upload", post(upload_lesson_handler::<I>))
        .route("/api/lessons/{id}", get(get_lesson_handler::<I>))
        .route("/api/lessons/{id}/speech", post(assess_speech_handler::<I>))
        .route(
            "/api/lessons/{id}/handwriting",
            post(assess_handwriting_handler::<I>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
