mod config;
mod editor;
mod errors;
mod models;
mod palette;
mod routes;
mod session;
mod source;
mod state;
mod themes;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::palette::PaletteStore;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::source::GistSource;
use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Studio v{}", env!("CARGO_PKG_VERSION"));

    let source = GistSource::new(config.gist_api_base.clone(), config.fetch_timeout)
        .context("Failed to build the gist HTTP client")?;
    info!("Gist source initialized ({})", config.gist_api_base);

    let palette = PaletteStore::load(&config.palette_path).await;

    let sessions = SessionStore::new();
    spawn_session_sweeper(sessions.clone(), config.session_ttl)?;

    let state = AppState {
        config: config.clone(),
        sessions,
        source: Arc::new(source),
        palette: Arc::new(palette),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Drops idle editor sessions in the background.
fn spawn_session_sweeper(sessions: SessionStore, ttl: Duration) -> Result<()> {
    let ttl = chrono::Duration::from_std(ttl).context("SESSION_TTL_SECS is out of range")?;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let dropped = sessions.sweep(ttl).await;
            if dropped > 0 {
                info!("Swept {dropped} idle editor sessions");
            }
        }
    });
    Ok(())
}
