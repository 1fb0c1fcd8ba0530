// src/api/http/creative.rs
// Generation and conversational refinement endpoints

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::agents::{GenerateResult, Refinement};
use crate::api::error::{ApiError, ApiResult, missing_fields_error};
use crate::api::types::{GenerateRequest, RefineRequest};
use crate::state::AppState;

const BODY_REQUIRED: &str = "Request body required";

/// A body must be a non-empty JSON object; `{}` counts as no body at all
fn request_body<T: DeserializeOwned>(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<T> {
    let Json(value) = payload.map_err(|rejection| {
        debug!("rejected request body: {}", rejection.body_text());
        ApiError::bad_request(BODY_REQUIRED)
    })?;

    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(ApiError::bad_request(BODY_REQUIRED)),
    }

    serde_json::from_value(value).map_err(|e| {
        debug!("request body has the wrong shape: {}", e);
        ApiError::bad_request(BODY_REQUIRED)
    })
}

/// POST /api/generate: run all four agents over a brief
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<GenerateResult>> {
    let request: GenerateRequest = request_body(payload)?;
    let brief = request
        .into_brief()
        .map_err(|missing| missing_fields_error(&missing))?;

    Ok(Json(state.pipeline.generate(brief).await))
}

/// POST /api/refine: regenerate copy, honouring any tone asked for in the message
pub async fn refine_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Refinement>> {
    let request: RefineRequest = request_body(payload)?;

    Ok(Json(
        state.pipeline.refine(&request.message, request.brief).await,
    ))
}
