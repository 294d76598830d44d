use async_trait::async_trait;

use crate::domain::Lesson;

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Lesson>, RepositoryError>;
    async fn put(&self, lesson: Lesson) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),
}
