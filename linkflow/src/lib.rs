//! Bank-account link flow shared by the escrow portal client.
//!
//! This crate is UI-framework agnostic. It owns the link-token → widget-open →
//! public-token exchange sequence as a plain state machine so the Leptos page
//! only wires signals and HTTP calls around it.
//!
//! - `controller`: the `LinkController` state machine
//! - `driver`: async glue running controller requests against a `LinkBackend`
//! - `error`: backend error type and the user-facing message policy
//! - `session`: session store seam and the privileged-role guard
//! - `types`: wire DTOs for the link endpoints
//! - `widget`: the hosted widget seam

pub mod controller;
pub mod driver;
pub mod error;
pub mod session;
pub mod types;
pub mod widget;

pub use controller::{ExchangeRequest, LinkController, LinkStatus, RequestSeq, TokenRequest};
pub use driver::{FlowHandle, LinkBackend};
pub use error::ApiError;
pub use session::{SessionStore, SessionUser, UserId};
pub use widget::LinkWidget;
