use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use interavoice::application::ports::FaqSource;
use interavoice::application::services::{AnswerService, FaqStore, IntentEngine};
use interavoice::infrastructure::audio::TranscriptionEngineFactory;
use interavoice::infrastructure::observability::init_tracing;
use interavoice::infrastructure::persistence::JsonFileFaqSource;
use interavoice::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;

    init_tracing(&settings.tracing_config(), settings.server.port)?;

    let faq_source: Arc<dyn FaqSource> = Arc::new(JsonFileFaqSource::new(&settings.faq.path));
    let faq_store = Arc::new(FaqStore::open(faq_source, settings.faq.missing_source).await);

    let engine = IntentEngine::new(settings.threshold()?);
    let answer_service = Arc::new(AnswerService::new(
        Arc::clone(&faq_store),
        engine,
        settings.chat.fallback_message.clone(),
    ));

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        &settings.transcription.whisper_options(),
    )
    .context("configuring speech-to-text")?;

    if transcription_engine.is_none() {
        tracing::warn!("Speech-to-text disabled, /speech-to-text will answer 503");
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        answer_service,
        faq_store,
        transcription_engine,
        settings,
    };

    let router = create_router(state);

    tracing::info!("InteraVoice listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("InteraVoice stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
