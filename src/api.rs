//! REST API Server for the support responder
//!
//! Exposes the intent responder via HTTP endpoints
//! and serves the browser chat page

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::models::{ChatRequest, ChatResponse};
use crate::responder::IntentResponder;
use crate::responses::EMPTY_INPUT_REPLY;
use crate::Result;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// =============================
/// API State
/// =============================

#[derive(Clone, Default)]
pub struct ApiState {
    pub responder: IntentResponder,
}

/// =============================
/// Landing Page
/// =============================

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoint
/// =============================

async fn chat_handler(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Rejected chat request body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ChatResponse {
                    response: EMPTY_INPUT_REPLY.to_string(),
                    is_exit: false,
                }),
            );
        }
    };

    let turn = state.responder.process(&req.message);
    info!(intent = ?turn.intent, is_exit = turn.is_exit(), "chat turn handled");

    (StatusCode::OK, Json(ChatResponse::from(turn)))
}

/// =============================
/// Router
/// =============================

pub fn create_router(responder: IntentResponder) -> Router {
    let state = ApiState { responder };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/chat", post(chat_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(settings: &Settings) -> Result<()> {
    let router = create_router(IntentResponder::new());

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API Server listening on http://{}", addr);
    info!("Local: http://127.0.0.1:{}", settings.port);

    axum::serve(listener, router).await?;

    Ok(())
}
