use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{InferenceClient, LessonRepository};
use crate::application::services::AssessmentService;

pub struct AppState<I>
where
    I: InferenceClient,
{
    pub assessment_service: Arc<AssessmentService<I>>,
    pub lesson_repository: Arc<dyn LessonRepository>,
    /// Cancelled on shutdown; handlers derive per-request tokens from it so
    /// in-flight provider calls abort instead of lingering.
    pub shutdown: CancellationToken,
}

impl<I> Clone for AppState<I>
where
    I: InferenceClient,
{
    fn clone(&self) -> Self {
        Self {
            assessment_service: Arc::clone(&self.assessment_service),
            lesson_repository: Arc::clone(&self.lesson_repository),
            shutdown: self.shutdown.clone(),
        }
    }
}
