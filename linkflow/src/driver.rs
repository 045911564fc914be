//! Async glue between the controller and the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser runs every step on one thread, so neither trait requires
//! `Send`. The controller lives behind a `FlowHandle`: a `RefCell` in tests, a
//! reactive signal in the client. Handles are only borrowed between awaits,
//! never across one.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::RefCell;

use crate::controller::{ExchangeRequest, LinkController};
use crate::error::ApiError;
use crate::session::SessionStore;
use crate::types::{CreateLinkTokenRequest, CreateLinkTokenResponse, ExchangePublicTokenRequest};
use crate::widget::{LinkWidget, WidgetEvent};

/// Backend endpoints used by the link flow.
#[async_trait::async_trait(?Send)]
pub trait LinkBackend {
    /// `POST /create_plaid_link`.
    async fn create_link_token(&self, body: &CreateLinkTokenRequest) -> Result<CreateLinkTokenResponse, ApiError>;

    /// `POST /exchange_public_token`.
    async fn exchange_public_token(&self, body: &ExchangePublicTokenRequest) -> Result<(), ApiError>;
}

/// Shared mutable access to a `LinkController`.
pub trait FlowHandle {
    /// Run `f` against the controller. `None` if the controller is gone.
    fn with_flow<R>(&self, f: impl FnOnce(&mut LinkController) -> R) -> Option<R>;
}

impl FlowHandle for RefCell<LinkController> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut LinkController) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch a link token and store it in the controller.
///
/// Returns `false` when nothing was applied: no user, a disposed controller,
/// or a response superseded by a newer request.
pub async fn request_link_token<H, B, S>(flow: &H, backend: &B, session: &S) -> bool
where
    H: FlowHandle,
    B: LinkBackend + ?Sized,
    S: SessionStore,
{
    let Some(Some(req)) = flow.with_flow(|ctrl| ctrl.begin_token_fetch(session)) else {
        return false;
    };
    let result = backend.create_link_token(&req.body).await;
    match &result {
        Ok(resp) => log::debug!(
            "linkflow: link token issued expiration={} request_id={}",
            resp.expiration,
            resp.request_id
        ),
        Err(err) => log::warn!("linkflow: link token request failed: {err}"),
    }
    flow.with_flow(|ctrl| ctrl.finish_token_fetch(req.seq, result)).unwrap_or(false)
}

/// Exchange a public token returned by the widget.
///
/// Returns `false` when nothing was applied.
pub async fn exchange_public_token<H, B, S>(flow: &H, backend: &B, session: &S, public_token: String) -> bool
where
    H: FlowHandle,
    B: LinkBackend + ?Sized,
    S: SessionStore,
{
    let Some(Some(req)) = flow.with_flow(|ctrl| ctrl.begin_exchange(session, public_token)) else {
        return false;
    };
    run_exchange(flow, backend, session, req).await
}

async fn run_exchange<H, B, S>(flow: &H, backend: &B, session: &S, req: ExchangeRequest) -> bool
where
    H: FlowHandle,
    B: LinkBackend + ?Sized,
    S: SessionStore,
{
    let result = backend.exchange_public_token(&req.body).await;
    if let Err(err) = &result {
        log::warn!("linkflow: public token exchange failed: {err}");
    }
    flow.with_flow(|ctrl| ctrl.finish_exchange(req.seq, result, session)).unwrap_or(false)
}

/// Feed one widget event through the controller, sending the exchange a
/// success event calls for.
pub async fn dispatch_widget_event<H, B, S, W>(flow: &H, backend: &B, session: &S, widget: &W, event: WidgetEvent)
where
    H: FlowHandle,
    B: LinkBackend + ?Sized,
    S: SessionStore,
    W: LinkWidget,
{
    let Some(Some(req)) = flow.with_flow(|ctrl| ctrl.on_widget_event(event, session, widget)) else {
        return;
    };
    run_exchange(flow, backend, session, req).await;
}
