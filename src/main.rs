use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;
use tokio::net::TcpListener;

use alhootah::application::Locale;
use alhootah::application::ports::{ChatClient, SpeechSynthesizer, StatusCheckRepository};
use alhootah::application::services::{ChatService, SourceAggregator, SpeechService};
use alhootah::infrastructure::llm::create_chat_client;
use alhootah::infrastructure::observability::{TracingConfig, init_tracing};
use alhootah::infrastructure::persistence::{
    InMemoryStatusCheckRepository, PgStatusCheckRepository, create_pool, run_migrations,
};
use alhootah::infrastructure::speech::create_speech_client;
use alhootah::infrastructure::storage::TempFileAttachmentStore;
use alhootah::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let locale = Locale::try_from(settings.chat.locale.clone()).map_err(anyhow::Error::msg)?;
    let catalog = locale.catalog();

    let http_client = reqwest::Client::new();

    let chat_client: Option<Arc<dyn ChatClient>> =
        match create_chat_client(&settings.llm, http_client.clone(), catalog.system_prompt) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn ChatClient>),
            Err(e) => {
                tracing::warn!(error = %e, "Chat client disabled");
                None
            }
        };

    let speech_client: Option<Arc<dyn SpeechSynthesizer>> =
        match create_speech_client(&settings.speech, http_client) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn SpeechSynthesizer>),
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis disabled");
                None
            }
        };

    let attachment_store = Arc::new(
        TempFileAttachmentStore::new(settings.storage.temp_dir.as_ref().map(PathBuf::from))
            .context("Failed to prepare attachment directory")?,
    );

    let (status_repository, pool): (Arc<dyn StatusCheckRepository>, Option<PgPool>) =
        match &settings.database.url {
            Some(url) => {
                let pool = create_pool(url, settings.database.max_connections).await?;
                run_migrations(&pool).await?;
                let repository: Arc<dyn StatusCheckRepository> =
                    Arc::new(PgStatusCheckRepository::new(pool.clone()));
                (repository, Some(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set, status checks are kept in memory");
                let repository: Arc<dyn StatusCheckRepository> =
                    Arc::new(InMemoryStatusCheckRepository::new());
                (repository, None)
            }
        };

    let state = AppState {
        chat_service: Arc::new(ChatService::new(
            chat_client,
            SourceAggregator::new(attachment_store, catalog),
        )),
        speech_service: Arc::new(SpeechService::new(speech_client)),
        status_repository,
        catalog,
    };

    let router = create_router(state, &settings.cors, settings.server.max_body_bytes);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(
        address = %address,
        environment = %environment,
        locale = %locale,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
