use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment as EnvironmentSource, File};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use stavern::application::ports::LessonRepository;
use stavern::application::services::AssessmentService;
use stavern::infrastructure::inference::OpenAiInferenceClient;
use stavern::infrastructure::observability::{init_tracing, TracingConfig};
use stavern::infrastructure::persistence::InMemoryLessonRepository;
use stavern::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                .required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;

    // Fails here when the provider credential is absent; the server never
    // binds without one.
    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let inference_client = Arc::new(OpenAiInferenceClient::new(
        settings.inference.api_key.clone(),
        &settings.inference.base_url,
        settings.inference.chat_model.clone(),
        settings.inference.transcription_model.clone(),
        Duration::from_secs(settings.inference.timeout_secs),
    )?);

    let lesson_repository: Arc<dyn LessonRepository> = Arc::new(InMemoryLessonRepository::new());

    let assessment_service = Arc::new(AssessmentService::new(
        Arc::clone(&lesson_repository),
        Arc::clone(&inference_client),
        settings.inference.max_tokens,
    ));

    let shutdown = CancellationToken::new();

    let state = AppState {
        assessment_service,
        lesson_repository,
        shutdown: shutdown.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
