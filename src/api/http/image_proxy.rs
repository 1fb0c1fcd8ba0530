// src/api/http/image_proxy.rs
// Same-origin download proxy for ad visuals hosted on allowlisted CDNs

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use url::Url;

use crate::api::error::{ApiError, ApiResult, IntoApiError, missing_param_error};
use crate::api::types::DownloadImageQuery;
use crate::state::AppState;

pub const DEFAULT_FILENAME: &str = "ad-image.jpg";
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Parse `raw` and accept it only when its host is an allowlisted domain or a
/// subdomain of one. Non-http(s) schemes are rejected.
pub fn allowed_image_url(raw: &str, allowed_domains: &[String]) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let allowed = allowed_domains.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    });

    allowed.then_some(url)
}

/// Filename safe to place inside a quoted Content-Disposition value
pub fn sanitize_filename(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}

pub async fn download_image_handler(
    State(state): State<AppState>,
    Query(query): Query<DownloadImageQuery>,
) -> ApiResult<Response> {
    let raw_url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| missing_param_error("url"))?;
    let filename = sanitize_filename(query.filename.as_deref().unwrap_or(DEFAULT_FILENAME));

    let Some(url) = allowed_image_url(raw_url, &state.config.allowed_image_domains) else {
        warn!(url = %raw_url, "image download refused for non-allowlisted domain");
        return Err(ApiError::forbidden("Image domain not allowed"));
    };

    debug!(url = %url, "proxying image download");
    let upstream = state
        .http_client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .into_internal_error("Failed to fetch image")?;

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();
    let bytes = upstream
        .bytes()
        .await
        .into_internal_error("Failed to fetch image")?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        bytes,
    )
        .into_response())
}
