mod in_memory_lesson_repository;

pub use in_memory_lesson_repository::InMemoryLessonRepository;
