// HTTP request handlers
use crate::domain::dashboard::{Dashboard, MessageLevel};
use crate::infrastructure::http_response::{accepts_brotli, html_response, json_response};
use crate::infrastructure::plotly_mapper::dashboard_to_json;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_dashboard;
use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

async fn load_dashboard(state: &AppState) -> Dashboard {
    let dashboard = state.dashboard_service.load().await;

    let errors = dashboard
        .messages()
        .filter(|(level, _)| *level == MessageLevel::Error)
        .count();
    tracing::info!(
        "Dashboard loaded: {} charts, {} errors",
        dashboard.charts().count(),
        errors
    );

    dashboard
}

/// Dashboard page; every request is a fresh load
pub async fn dashboard_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let dashboard = load_dashboard(&state).await;

    match html_response(render_dashboard(&dashboard), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Dashboard view model with charts as Plotly figures
pub async fn dashboard_json(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let dashboard = load_dashboard(&state).await;

    match json_response(&dashboard_to_json(&dashboard), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
