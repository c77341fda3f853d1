mod analysis;
mod config;
mod enrichment;
mod errors;
mod job;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enrichment::llm::LlmExtractionProvider;
use crate::enrichment::ExtractionProvider;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FitLens API v{}", env!("CARGO_PKG_VERSION"));

    // AI enrichment is only wired when an API key is configured
    let extractor: Option<Arc<dyn ExtractionProvider>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_model.clone())?;
            info!("LLM enrichment enabled (model: {})", llm.model());
            Some(Arc::new(LlmExtractionProvider::new(llm)))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; running heuristics only");
            None
        }
    };

    info!("Input limit: {} characters", config.max_input_chars);

    let state = AppState::new(config.clone(), extractor);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
