use anyhow::Result;
use newsroom_core::application::{
    ports::{render::ArticleRenderer, time::Clock},
    services::ApplicationServices,
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::article::services::SlugGenerator;
use newsroom_core::infrastructure::{
    render::HtmlArticleRenderer, storage::StorageAdapters, time::SystemClock,
    util::TitleSlugGenerator,
};
use newsroom_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let storage = StorageAdapters::connect(&config).await?;

    let renderer: Arc<dyn ArticleRenderer> =
        Arc::new(HtmlArticleRenderer::new(config.site_name()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TitleSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&storage.submissions),
        Arc::clone(&storage.publications),
        Arc::clone(&storage.article_writes),
        Arc::clone(&storage.article_reads),
        renderer,
        clock,
        slugger,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, &RouterSettings::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(mode = ?config.storage_mode(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
