use stavern::application::ports::LessonRepository;
use stavern::domain::Lesson;
use stavern::infrastructure::persistence::InMemoryLessonRepository;

#[tokio::test]
async fn given_stored_lesson_when_fetched_then_returns_it() {
    let repository = InMemoryLessonRepository::new();
    let lesson = Lesson::new(1, vec!["sun".to_string()], Some("week 1".to_string()));

    repository.put(lesson.clone()).await.unwrap();

    let fetched = repository.get(1).await.unwrap();
    assert_eq!(fetched, Some(lesson));
}

#[tokio::test]
async fn given_empty_registry_when_fetched_then_returns_none() {
    let repository = InMemoryLessonRepository::new();

    let fetched = repository.get(42).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_existing_id_when_put_again_then_replaces_the_lesson() {
    let repository = InMemoryLessonRepository::new();

    repository
        .put(Lesson::new(1, vec!["sun".to_string()], None))
        .await
        .unwrap();
    repository
        .put(Lesson::new(1, vec!["moon".to_string()], None))
        .await
        .unwrap();

    let fetched = repository.get(1).await.unwrap().unwrap();
    assert_eq!(fetched.words, vec!["moon"]);
}
