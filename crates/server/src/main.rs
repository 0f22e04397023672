use anyhow::Context;
use dotenvy::dotenv;
use sitemeta_core::Extractor;
use sitemeta_server::ServerConfig;
use sitemeta_server::config::DEFAULT_LOG_FILTER;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before tracing so RUST_LOG from the file is honored.
    let dotenv_result = dotenv();
    init_tracing();
    match dotenv_result {
        Ok(path) => info!(".env read successfully from {}", path.display()),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => return Err(e).context("Failed to load .env file"),
    }

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let extractor = Extractor::with_config(&config.fetch).context("Failed to build HTTP client")?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    info!(
        addr = %config.addr,
        fetch_timeout = config.fetch.timeout,
        max_redirects = config.fetch.max_redirects,
        max_body_bytes = config.fetch.max_body_bytes,
        "sitemeta server listening"
    );

    axum::serve(listener, sitemeta_server::app(extractor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}
