//! HTTP request handlers

use super::types::{ErrorResponse, MessageRequest, MessageResponse, VersionResponse};
use super::AppState;
use crate::session::SessionState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One conversation turn
        .route("/api/conversations/:id/messages", post(send_message))
        // Session inspection and reset
        .route(
            "/api/conversations/:id/session",
            get(get_session).delete(reset_session),
        )
        .route("/version", get(get_version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================
// Conversation turns
// ============================================================

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("conversation id is empty".to_string()));
    }

    let slot = state.sessions.handle(&id).await;
    // Held for the whole turn: one turn per conversation at a time
    let mut session = slot.lock().await;
    let from = session.menu_state();
    let reply = state.dispatcher.execute(&req.text, &mut session).await;

    tracing::info!(
        conversation = %id,
        from = %from,
        to = %session.menu_state(),
        "Turn processed"
    );

    Ok(Json(MessageResponse { reply }))
}

// ============================================================
// Session state
// ============================================================

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionState>, AppError> {
    state
        .sessions
        .snapshot(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no session for conversation {id}")))
}

async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(&id).await {
        tracing::info!(conversation = %id, "Session reset");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("no session for conversation {id}")))
    }
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
