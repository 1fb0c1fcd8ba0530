// src/api/http/handlers.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::agents::AGENT_NAMES;
use crate::state::AppState;

/// Health check handler
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "agents": AGENT_NAMES,
        "mode": state.config.mode_label(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
