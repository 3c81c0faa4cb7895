mod config;
mod errors;
mod form;
mod job_source;
mod letter;
mod llm_client;
mod models;
mod proxy;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::job_source::HttpJobParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values; a missing key only warns)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AutoCover API v{}", env!("CARGO_PKG_VERSION"));
    config.warn_if_unconfigured();

    // One HTTP client shared by both outbound integrations. No timeout: the
    // transport default applies.
    let http = reqwest::Client::builder()
        .user_agent(concat!("autocover-api/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let completion = llm_client::build_client(&config, http.clone());
    info!(
        "Completion client initialized (mode: {:?}, endpoint: {})",
        config.completion_mode, config.completion_endpoint
    );

    let parser = Arc::new(HttpJobParser::new(http, config.job_parser_url.clone()));
    info!("Job parser client initialized ({})", config.job_parser_url);

    let state = AppState {
        config: config.clone(),
        completion,
        parser,
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
