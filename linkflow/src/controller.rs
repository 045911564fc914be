//! Link flow state machine.
//!
//! DESIGN
//! ======
//! The controller never performs I/O. Each backend call is split into a
//! `begin_*` step that validates preconditions and hands back a request tagged
//! with a `RequestSeq`, and a `finish_*` step that applies the response. Only
//! the most recently issued request may change state; older completions are
//! dropped so overlapping clicks resolve to the last request made.
//!
//! LIFECYCLE
//! =========
//! `Idle → Fetching → AwaitingUserAction → Exchanging → Linked`, with any
//! failure landing in `Failed` and a widget exit returning to `Idle`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::error::{ApiError, EXCHANGE_FALLBACK, TOKEN_FETCH_FALLBACK, user_facing_message};
use crate::session::SessionStore;
use crate::types::{CreateLinkTokenRequest, CreateLinkTokenResponse, ExchangePublicTokenRequest};
use crate::widget::{LinkWidget, WidgetEvent};

/// Phase of the current link attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStatus {
    #[default]
    Idle,
    Fetching,
    AwaitingUserAction,
    Exchanging,
    Linked,
    Failed,
}

/// Tag identifying one backend request issued by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A link-token request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequest {
    pub seq: RequestSeq,
    pub body: CreateLinkTokenRequest,
}

/// A public-token exchange ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub seq: RequestSeq,
    pub body: ExchangePublicTokenRequest,
}

/// One user's bank-link session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkController {
    token: Option<String>,
    expiration: Option<String>,
    request_id: Option<String>,
    auto_open_pending: bool,
    status: LinkStatus,
    last_error: Option<String>,
    issued: u64,
}

impl LinkController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    #[must_use]
    pub fn auto_open_pending(&self) -> bool {
        self.auto_open_pending
    }

    #[must_use]
    pub fn status(&self) -> LinkStatus {
        self.status
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// A backend request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LinkStatus::Fetching | LinkStatus::Exchanging)
    }

    fn issue(&mut self) -> RequestSeq {
        self.issued += 1;
        RequestSeq(self.issued)
    }

    fn is_current(&self, seq: RequestSeq) -> bool {
        seq.0 == self.issued
    }

    /// Start a link-token request for the logged-in user.
    ///
    /// Returns `None` without touching state when no user id is available.
    pub fn begin_token_fetch(&mut self, session: &impl SessionStore) -> Option<TokenRequest> {
        let user_id = session.current_user_id()?;
        self.last_error = None;
        self.status = LinkStatus::Fetching;
        let seq = self.issue();
        Some(TokenRequest { seq, body: CreateLinkTokenRequest { user_id } })
    }

    /// Apply the outcome of a link-token request.
    ///
    /// Returns `false` when the response belongs to a superseded request and
    /// was ignored.
    pub fn finish_token_fetch(&mut self, seq: RequestSeq, result: Result<CreateLinkTokenResponse, ApiError>) -> bool {
        if !self.is_current(seq) {
            log::debug!("linkflow: dropping stale link-token response seq={}", seq.get());
            return false;
        }
        match result {
            Ok(resp) => {
                self.token = Some(resp.link_token);
                self.expiration = Some(resp.expiration);
                self.request_id = Some(resp.request_id);
                self.auto_open_pending = true;
                self.status = LinkStatus::AwaitingUserAction;
            }
            Err(err) => {
                self.last_error = Some(user_facing_message(&err, TOKEN_FETCH_FALLBACK));
                self.status = LinkStatus::Failed;
            }
        }
        true
    }

    /// Open the widget once a fresh token arrived and the widget is ready.
    ///
    /// The pending flag is cleared before `open` so later re-evaluations with
    /// the same token do not reopen it. Returns whether `open` was called.
    pub fn poll_auto_open(&mut self, widget: &impl LinkWidget) -> bool {
        if self.token.is_none() || !self.auto_open_pending || !widget.ready() {
            return false;
        }
        self.auto_open_pending = false;
        widget.open();
        true
    }

    /// Start exchanging the widget's public token.
    ///
    /// Returns `None` without touching state when no user id is available.
    pub fn begin_exchange(&mut self, session: &impl SessionStore, public_token: String) -> Option<ExchangeRequest> {
        let user_id = session.current_user_id()?;
        self.last_error = None;
        self.status = LinkStatus::Exchanging;
        let seq = self.issue();
        Some(ExchangeRequest { seq, body: ExchangePublicTokenRequest { public_token, user_id } })
    }

    /// Apply the outcome of an exchange.
    ///
    /// On success the session's linked flag is set in the same step that
    /// clears the token. Returns `false` for superseded responses.
    pub fn finish_exchange(
        &mut self,
        seq: RequestSeq,
        result: Result<(), ApiError>,
        session: &impl SessionStore,
    ) -> bool {
        if !self.is_current(seq) {
            log::debug!("linkflow: dropping stale exchange response seq={}", seq.get());
            return false;
        }
        match result {
            Ok(()) => {
                session.set_bank_linked(true);
                self.token = None;
                self.status = LinkStatus::Linked;
            }
            Err(err) => {
                self.last_error = Some(user_facing_message(&err, EXCHANGE_FALLBACK));
                self.status = LinkStatus::Failed;
            }
        }
        true
    }

    /// The user closed the widget without linking.
    pub fn on_widget_exit(&mut self) {
        self.token = None;
        self.auto_open_pending = false;
        self.status = LinkStatus::Idle;
    }

    /// Route a widget lifecycle event.
    ///
    /// A success event yields the exchange request the caller must send.
    pub fn on_widget_event(
        &mut self,
        event: WidgetEvent,
        session: &impl SessionStore,
        widget: &impl LinkWidget,
    ) -> Option<ExchangeRequest> {
        match event {
            WidgetEvent::Ready => {
                self.poll_auto_open(widget);
                None
            }
            WidgetEvent::Success { public_token } => self.begin_exchange(session, public_token),
            WidgetEvent::Exit => {
                self.on_widget_exit();
                None
            }
        }
    }
}
