//! HTTP API gateway for Guidepost.
//!
//! Exposes the chat endpoint plus category listing and health checks:
//!
//! - `POST /api/chat`              — One chat turn against the resolved policy
//! - `GET  /api/categories/{type}` — Registry listing for a guidance type
//! - `GET  /health`                — Liveness check
//!
//! Built on Axum. The server is stateless across requests: the client
//! resends full history every call, so the only shared state is the
//! provider handle.

pub mod outcome;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use guidepost_core::history::adapt_history;
use guidepost_core::provider::{GenerationRequest, Provider};
use guidepost_core::turn::WireTurn;
use guidepost_policy::{registry, resolver};

use crate::outcome::{ChatOutcome, classify};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub provider: Arc<dyn Provider>,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// CORS is permissive: the policy engine has no secrets to protect and the
/// chat client may be served from anywhere.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/categories/{type}", get(categories_handler))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(
    config: guidepost_config::AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let provider = Arc::new(guidepost_providers::build_from_config(&config));
    let state = Arc::new(GatewayState { provider });

    let app = build_router(state);

    info!(addr = %addr, model = %config.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatRequest {
    /// The newest user message. Must be non-empty after trimming.
    #[serde(default)]
    message: String,

    /// Full prior conversation, client-owned. Malformed entries, object
    /// or not, are dropped during adaptation; only a non-array value
    /// fails deserialization and is rejected as a validation error.
    history: Vec<WireTurn>,

    /// Category identifier within the guidance type.
    #[serde(default)]
    category: String,

    /// Guidance type ("mental" or "technical").
    #[serde(default, rename = "type")]
    guidance_type: String,
}

#[derive(Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,

    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
}

impl ErrorResponse {
    fn plain(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: None,
        }
    }
}

#[derive(Serialize)]
struct CategoriesResponse {
    r#type: String,
    categories: Vec<&'static str>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

// ── Handlers ──────────────────────────────────────────────────────────────

const INVALID_REQUEST: &str =
    "Invalid request: Missing or malformed required fields (message, history, category, type).";

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn categories_handler(
    Path(type_str): Path<String>,
) -> Result<Json<CategoriesResponse>, (StatusCode, Json<ErrorResponse>)> {
    match registry::categories_for(&type_str) {
        Some(categories) => Ok(Json(CategoriesResponse {
            r#type: type_str,
            categories,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::plain(format!(
                "Unknown guidance type: {type_str}"
            ))),
        )),
    }
}

/// One chat turn: validate → resolve policy → adapt history → one upstream
/// call → classify. Validation failures never reach the provider.
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Malformed chat request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::plain(INVALID_REQUEST)),
        )
    })?;

    if payload.message.trim().is_empty()
        || payload.category.trim().is_empty()
        || payload.guidance_type.trim().is_empty()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::plain(INVALID_REQUEST)),
        ));
    }

    if !registry::is_valid(&payload.guidance_type, &payload.category) {
        // Deliberately permissive: the resolver falls back to the most
        // restrictive default policy for the type (or the universal
        // refusal), so unknown pairs degrade rather than reject.
        warn!(
            guidance_type = %payload.guidance_type,
            category = %payload.category,
            "Unregistered (type, category), falling back to default policy"
        );
    }

    let policy = resolver::resolve(&payload.guidance_type, &payload.category);
    let history = adapt_history(&payload.history);

    info!(
        guidance_type = %payload.guidance_type,
        category = %payload.category,
        history_turns = history.len(),
        message_len = payload.message.len(),
        "Chat request"
    );

    let request = GenerationRequest {
        system_instruction: policy.system_instruction,
        history,
        message: payload.message,
    };

    let result = state.provider.generate(request).await;

    match classify(result) {
        ChatOutcome::Success { text } => Ok(Json(ChatResponse { response: text })),
        ChatOutcome::Failure {
            user_message,
            error_code,
            http_status,
        } => {
            warn!(
                status = %http_status,
                code = error_code.as_deref().unwrap_or("-"),
                "Chat request failed"
            );
            Err((
                http_status,
                Json(ErrorResponse {
                    error: user_message,
                    error_code,
                }),
            ))
        }
    }
}
