//! REST API helpers for the backend endpoints used by the portal pages.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's `/api` forwarder.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-success statuses carry the
//! body's `message` string so pages can show the backend's own wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use linkflow::{ApiError, LinkBackend};

use super::types::{CreateLinkTokenRequest, CreateLinkTokenResponse, EscrowRecord, ExchangePublicTokenRequest};

/// Prefix under which the host forwards calls to the backend.
pub const API_BASE: &str = "/api";

/// Escrow scope listed by the escrow page.
pub const ESCROW_SCOPE: u32 = 36;

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn escrow_endpoint(scope: u32) -> String {
    endpoint(&format!("escrow/{scope}"))
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

/// Request a link token via `POST /api/create_plaid_link`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the
/// response is not a link-token payload.
pub async fn create_link_token(body: &CreateLinkTokenRequest) -> Result<CreateLinkTokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("create_plaid_link"))
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let resp = check_status(resp).await?;
        resp.json::<CreateLinkTokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Exchange the widget's public token via `POST /api/exchange_public_token`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn exchange_public_token(body: &ExchangePublicTokenRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("exchange_public_token"))
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(server_unavailable())
    }
}

/// Fetch the escrow records for `scope` via `GET /api/escrow/{scope}`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the body
/// is not a JSON array.
pub async fn fetch_escrow_records(scope: u32) -> Result<Vec<EscrowRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&escrow_endpoint(scope))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(network_error)?;
        let resp = check_status(resp).await?;
        resp.json::<Vec<EscrowRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scope;
        Err(server_unavailable())
    }
}

/// `LinkBackend` backed by the REST helpers above.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpLinkBackend;

#[async_trait::async_trait(?Send)]
impl LinkBackend for HttpLinkBackend {
    async fn create_link_token(&self, body: &CreateLinkTokenRequest) -> Result<CreateLinkTokenResponse, ApiError> {
        create_link_token(body).await
    }

    async fn exchange_public_token(&self, body: &ExchangePublicTokenRequest) -> Result<(), ApiError> {
        exchange_public_token(body).await
    }
}
