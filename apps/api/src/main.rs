mod auth;
mod careers;
mod colleges;
mod config;
mod db;
mod errors;
mod extract;
mod models;
mod quiz;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::colleges::catalog::CollegeCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = create_pool(&url).await?;
            info!("Using PostgreSQL storage");
            AppState::postgres(config.clone(), pool)
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
            AppState::in_memory(config.clone())
        }
    };
    let state = match &config.colleges_file {
        Some(path) => {
            let colleges = CollegeCatalog::load(path)?;
            info!("Loaded {} colleges from {}", colleges.len(), path.display());
            state.with_colleges(colleges)
        }
        None => state,
    };
    info!(
        "Serving {} questions, {} careers and {} colleges (top {} recommendations per user)",
        state.quiz.questions().len(),
        state.quiz.catalog().len(),
        state.colleges.len(),
        config.recommendation_limit
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
