//! Hosted linking widget seam.
//!
//! The widget is created from a link token and reports three lifecycle events
//! back to the host: ready, success (with a public token), and exit. The host
//! drives it with a single outbound action, `open`.

/// Outbound side of the hosted linking widget.
pub trait LinkWidget {
    /// Whether the widget finished loading and can be opened.
    fn ready(&self) -> bool;

    /// Present the widget to the user.
    fn open(&self);
}

/// Inbound lifecycle events reported by the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    Ready,
    Success { public_token: String },
    Exit,
}
