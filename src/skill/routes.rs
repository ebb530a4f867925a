//! HTTP endpoint the voice platform posts events to.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::SkillError;

use super::handler::SkillHandler;
use super::request::{Request, SkillEvent};

/// Shared state for skill routes.
#[derive(Clone)]
pub struct SkillRouteState {
    pub handler: Arc<SkillHandler>,
}

/// POST /alexa
///
/// Runs one platform event through the handler and returns the envelope.
async fn handle_event(
    State(state): State<SkillRouteState>,
    Json(event): Json<SkillEvent>,
) -> impl IntoResponse {
    match state.handler.handle(&event).await {
        Ok(response) => {
            let intent = match &event.request {
                Request::IntentRequest(req) => Some(&req.intent),
                _ => None,
            };
            Json(response.into_envelope(intent)).into_response()
        }
        Err(e) => (
            error_status(&e),
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

fn error_status(e: &SkillError) -> StatusCode {
    match e {
        SkillError::ApplicationMismatch { .. } | SkillError::MissingApplication => {
            StatusCode::FORBIDDEN
        }
        SkillError::MissingUser => StatusCode::BAD_REQUEST,
    }
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the skill routes.
pub fn skill_routes(state: SkillRouteState) -> Router {
    Router::new()
        .route("/alexa", post(handle_event))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
