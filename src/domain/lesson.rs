use chrono::{DateTime, Utc};

/// A named set of target words a learner is being drilled on.
///
/// The identifier is assigned externally; lessons are immutable once an
/// assessment has been run against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub words: Vec<String>,
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(id: i64, words: Vec<String>, metadata: Option<String>) -> Self {
        Self {
            id,
            words,
            metadata,
            created_at: Utc::now(),
        }
    }
}
