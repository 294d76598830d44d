mod assessment;
mod lesson;
mod media;

pub use assessment::AssessmentResult;
pub use lesson::Lesson;
pub use media::{MediaKind, MediaPayload};
