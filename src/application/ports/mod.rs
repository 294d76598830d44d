mod inference_client;
mod lesson_repository;

pub use inference_client::{
    InferenceClient, InferenceClientError, InferenceKind, InferenceRequest,
};
pub use lesson_repository::{LessonRepository, RepositoryError};
