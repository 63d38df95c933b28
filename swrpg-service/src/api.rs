//! HTTP API for the SWRPG service.
//!
//! - Health and Prometheus metrics
//! - Chat event submission for hosts that prefer plain HTTP
//! - Template table listing
//! - WebSocket upgrade for the VTT bridge

use axum::{
    Json, Router,
    extract::{Path, State, WebSocketUpgrade},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::chat::Reply;
use crate::commands::ChatEvent;
use crate::error::{ServiceError, ServiceResult};
use crate::service::SwrpgService;
use crate::tables::{TemplateCategory, TemplateRecord};
use crate::websocket::handle_ws_connection;

/// Application state
pub struct AppState {
    pub service: Arc<SwrpgService>,
    pub metrics: PrometheusHandle,
}

/// Build the API router
pub fn router(service: Arc<SwrpgService>, metrics: PrometheusHandle) -> Router {
    let state = Arc::new(AppState { service, metrics });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/templates/{category}", get(templates_handler));

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/ws", get(ws_handler))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// === Health & Metrics ===

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.service.uptime().as_secs(),
        active_sessions: state.service.active_sessions(),
        bridge_connections: state.service.ws_manager.authenticated_count(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    active_sessions: usize,
    bridge_connections: usize,
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

// === Chat ===

#[derive(Debug, Deserialize)]
struct ChatRequest {
    game_id: String,
    #[serde(flatten)]
    event: ChatEvent,
}

#[derive(Serialize)]
struct ChatResponse {
    replies: Vec<Reply>,
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ServiceResult<Json<ChatResponse>> {
    if request.game_id.trim().is_empty() {
        return Err(ServiceError::InvalidRequest {
            message: "game_id must not be empty".to_string(),
        });
    }
    let replies = state
        .service
        .handle_chat_event(&request.game_id, &request.event);
    Ok(Json(ChatResponse { replies }))
}

// === Templates ===

async fn templates_handler(
    Path(category): Path<String>,
) -> ServiceResult<Json<&'static [TemplateRecord]>> {
    let category =
        TemplateCategory::from_str(&category).map_err(|_| ServiceError::InvalidRequest {
            message: format!("Unknown template category: {}", category),
        })?;
    Ok(Json(category.records()))
}

// === WebSocket ===

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("WebSocket upgrade request received");
    ws.on_upgrade(move |socket| handle_ws_connection(socket, state.service.clone()))
}
