use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{LessonRepository, RepositoryError};
use crate::domain::Lesson;

/// Process-local lesson registry. `put` with an existing id replaces the
/// stored lesson.
#[derive(Default)]
pub struct InMemoryLessonRepository {
    lessons: RwLock<HashMap<i64, Lesson>>,
}

impl InMemoryLessonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LessonRepository for InMemoryLessonRepository {
    async fn get(&self, id: i64) -> Result<Option<Lesson>, RepositoryError> {
        Ok(self.lessons.read().await.get(&id).cloned())
    }

    async fn put(&self, lesson: Lesson) -> Result<(), RepositoryError> {
        self.lessons.write().await.insert(lesson.id, lesson);
        Ok(())
    }
}
