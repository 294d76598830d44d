use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use tokio_util::sync::CancellationToken;

use stavern::application::ports::{
    InferenceClient, InferenceClientError, InferenceKind, InferenceRequest, LessonRepository,
};
use stavern::application::services::{AssessmentError, AssessmentService};
use stavern::domain::{AssessmentResult, Lesson, MediaKind, MediaPayload};
use stavern::infrastructure::persistence::InMemoryLessonRepository;

const TEST_MAX_TOKENS: u32 = 256;

/// Records every request it receives and replays a canned outcome.
struct RecordingInferenceClient {
    body: Result<&'static str, (u16, &'static str)>,
    invocations: AtomicUsize,
    last_request: Mutex<Option<InferenceRequest>>,
}

impl RecordingInferenceClient {
    fn succeeding(body: &'static str) -> Self {
        Self {
            body: Ok(body),
            invocations: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn failing(status_code: u16, detail: &'static str) -> Self {
        Self {
            body: Err((status_code, detail)),
            invocations: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> Option<InferenceRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for RecordingInferenceClient {
    async fn invoke(
        &self,
        request: InferenceRequest,
        cancel: &CancellationToken,
    ) -> Result<String, InferenceClientError> {
        if cancel.is_cancelled() {
            return Err(InferenceClientError::Cancelled);
        }

        self.invocations.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);

        match self.body {
            Ok(body) => Ok(body.to_string()),
            Err((status_code, detail)) => Err(InferenceClientError::Upstream {
                status_code,
                detail: detail.to_string(),
            }),
        }
    }
}

async fn seeded_repository() -> Arc<dyn LessonRepository> {
    let repository: Arc<dyn LessonRepository> = Arc::new(InMemoryLessonRepository::new());
    repository
        .put(Lesson::new(
            1,
            vec!["sun".to_string(), "moon".to_string()],
            None,
        ))
        .await
        .unwrap();
    repository
}

fn service(
    repository: Arc<dyn LessonRepository>,
    client: Arc<RecordingInferenceClient>,
) -> AssessmentService<RecordingInferenceClient> {
    AssessmentService::new(repository, client, TEST_MAX_TOKENS)
}

fn audio_payload(bytes: &[u8]) -> MediaPayload {
    MediaPayload {
        data: general_purpose::STANDARD.encode(bytes),
        kind: MediaKind::Audio,
    }
}

fn image_payload(bytes: &[u8]) -> MediaPayload {
    MediaPayload {
        data: general_purpose::STANDARD.encode(bytes),
        kind: MediaKind::Image,
    }
}

#[tokio::test]
async fn given_registered_lesson_when_speech_assessed_then_scores_full_marks() {
    let client = Arc::new(RecordingInferenceClient::succeeding(
        r#"{"text": "I see the sun and the moon"}"#,
    ));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let result = service
        .assess_speech(1, &audio_payload(b"wav bytes"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        result,
        AssessmentResult::Speech {
            transcript: "I see the sun and the moon".to_string(),
            score: 1.0,
        }
    );

    let request = client.last_request().unwrap();
    assert_eq!(request.kind, InferenceKind::Transcribe);
    assert_eq!(request.media, b"wav bytes");
    assert_eq!(request.media_mime, "audio/wav");
}

#[tokio::test]
async fn given_unknown_lesson_when_speech_assessed_then_fails_before_any_provider_call() {
    let client = Arc::new(RecordingInferenceClient::succeeding("{}"));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let result = service
        .assess_speech(99, &audio_payload(b"wav bytes"), &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AssessmentError::LessonNotFound(99))));
    assert_eq!(client.invocation_count(), 0);
}

#[tokio::test]
async fn given_invalid_payload_when_speech_assessed_then_fails_before_any_provider_call() {
    let client = Arc::new(RecordingInferenceClient::succeeding("{}"));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let payload = MediaPayload {
        data: "not base64 at all".to_string(),
        kind: MediaKind::Audio,
    };

    let result = service
        .assess_speech(1, &payload, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AssessmentError::InvalidMedia(_))));
    assert_eq!(client.invocation_count(), 0);
}

#[tokio::test]
async fn given_provider_failure_when_speech_assessed_then_surfaces_status_and_detail() {
    let client = Arc::new(RecordingInferenceClient::failing(503, "overloaded"));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let result = service
        .assess_speech(1, &audio_payload(b"wav bytes"), &CancellationToken::new())
        .await;

    match result {
        Err(AssessmentError::Upstream {
            status_code,
            detail,
        }) => {
            assert_eq!(status_code, 503);
            assert_eq!(detail, "overloaded");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unparseable_provider_body_when_speech_assessed_then_reports_malformed_response() {
    let client = Arc::new(RecordingInferenceClient::succeeding("<html>nope</html>"));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let result = service
        .assess_speech(1, &audio_payload(b"wav bytes"), &CancellationToken::new())
        .await;

    assert!(matches!(
        result,
        Err(AssessmentError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn given_cancelled_token_when_speech_assessed_then_reports_cancelled() {
    let client = Arc::new(RecordingInferenceClient::succeeding("{}"));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = service
        .assess_speech(1, &audio_payload(b"wav bytes"), &cancel)
        .await;

    assert!(matches!(result, Err(AssessmentError::Cancelled)));
}

#[tokio::test]
async fn given_lesson_photo_when_words_extracted_then_no_lesson_is_required() {
    let client = Arc::new(RecordingInferenceClient::succeeding(
        r#"{"choices": [{"message": {"content": "[\"tree\",\"river\"]"}}]}"#,
    ));
    // Deliberately empty registry: word extraction has no lesson dependency.
    let repository: Arc<dyn LessonRepository> = Arc::new(InMemoryLessonRepository::new());
    let service = service(repository, Arc::clone(&client));

    let result = service
        .extract_words(&image_payload(b"png bytes"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        result,
        AssessmentResult::WordExtraction {
            words: vec!["tree".to_string(), "river".to_string()],
        }
    );

    let request = client.last_request().unwrap();
    assert_eq!(request.kind, InferenceKind::VisionExtract);
    assert_eq!(request.media_mime, "image/png");
}

#[tokio::test]
async fn given_handwriting_sample_when_assessed_then_instructions_embed_lesson_words() {
    let client = Arc::new(RecordingInferenceClient::succeeding(
        r#"{"choices": [{"message": {"content": "Lovely rounded letters."}}]}"#,
    ));
    let service = service(seeded_repository().await, Arc::clone(&client));

    let result = service
        .assess_handwriting(1, &image_payload(b"png bytes"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        result,
        AssessmentResult::Handwriting {
            feedback: "Lovely rounded letters.".to_string(),
        }
    );

    let request = client.last_request().unwrap();
    assert_eq!(request.kind, InferenceKind::VisionGrade);
    assert!(request.instructions.contains("sun, moon"));
}
