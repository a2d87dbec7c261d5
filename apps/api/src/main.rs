mod analysis;
mod config;
mod employment;
mod errors;
mod notifications;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::{ResumeAnalyzer, SkillCatalog};
use crate::config::Config;
use crate::routes::build_router;
use crate::notifications::{LogNotifier, LogPayrollNotifier};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Scoring API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is built once and shared read-only by every request
    let catalog = SkillCatalog::builtin();
    info!("Skill catalog loaded ({} skills)", catalog.len());
    let analyzer = ResumeAnalyzer::new(catalog);

    // HR and payroll notifiers (log sinks by default)
    let notifier = Arc::new(LogNotifier);
    let payroll = Arc::new(LogPayrollNotifier);

    info!(
        "Shortlist threshold: {} (max upload {} bytes)",
        config.resume_score_threshold, config.max_upload_bytes
    );

    let state = AppState {
        config: config.clone(),
        analyzer,
        notifier,
        payroll,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the portal frontend URL is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
