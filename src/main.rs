// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::football_api::FootballDataRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_json, dashboard_page, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration once; the API token comes from here only
    let app_config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FootballDataRepository::new(
        app_config.api.base_url,
        app_config.api.token,
        app_config.api.competition,
    ));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository, app_config.dashboard);

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    // Responses are compressed by the handlers, so no CompressionLayer here
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_json))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address {}", app_config.server.bind))?;
    tracing::info!("Starting league-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
