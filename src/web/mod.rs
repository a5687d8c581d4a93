//! HTTP surface: intake form, `/generate`, PWA assets and health.

pub mod pages;
pub mod pwa;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::service::StrategyService;
use crate::strategy::{IntakeError, StrategyRequest};

/// Shared state passed to all request handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<StrategyService>,
}

/// Raw form body; presence of required fields is checked in
/// [`StrategyRequest::from_fields`].
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    intent: Option<String>,
    category: Option<String>,
    game_industry: Option<String>,
    audience: Option<String>,
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub fn router(service: Arc<StrategyService>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/manifest.json", get(manifest))
        .route("/sw.js", get(service_worker))
        .route("/health", get(health))
        .with_state(AppState { service })
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(service: Arc<StrategyService>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let local = listener.local_addr()?;

    info!("🚀 Strategy server listening on http://{}", local);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("🛑 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::form_page(state.service.brand()))
}

async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, IntakeError> {
    let request = StrategyRequest::from_fields(
        form.intent,
        form.category,
        form.game_industry,
        form.audience,
    )?;

    info!(
        "📨 Strategy request: category={} audience={}",
        request.category, request.audience
    );

    let document = state.service.generate(&request).await;
    Ok(Html(pages::result_page(
        state.service.brand(),
        &request,
        &document,
    )))
}

async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
    Json(pwa::manifest(state.service.brand()))
}

async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        pwa::SERVICE_WORKER,
    )
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "external_generation": state.service.external_enabled(),
    }))
}
