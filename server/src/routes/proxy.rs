//! `/api` forwarding to the application backend.
//!
//! The browser talks to a same-origin `/api` prefix; this handler relays each
//! request to `BACKEND_URL` with its method, query string, body and the
//! `content-type`/`authorization` headers. Upstream status and body come back
//! untouched so the client sees backend error payloads verbatim.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Message returned to the browser when the backend is unreachable.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "upstream request failed";

static FORWARDED_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, AUTHORIZATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or its response could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        (StatusCode::BAD_GATEWAY, Json(json!({ "message": UPSTREAM_FAILURE_MESSAGE }))).into_response()
    }
}

/// Join the backend base URL, the path below `/api` and an optional raw query.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/{*path}` — relay the request to the backend.
///
/// # Errors
///
/// Returns [`ProxyError::Upstream`] (rendered as `502`) when the backend
/// cannot be reached.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;

    if !status.is_success() {
        tracing::info!(status = status.as_u16(), %url, "backend returned error status");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
