//! Bank-link page state.
//!
//! DESIGN
//! ======
//! The link session itself is a `linkflow::LinkController` held in a signal.
//! This module adds the signal adapter the async driver needs and the small
//! presentation rules the page applies to controller state.

#[cfg(test)]
#[path = "bank_test.rs"]
mod bank_test;

use leptos::prelude::*;
use linkflow::{FlowHandle, LinkController};

/// Button label while a request is in flight.
pub const PREPARING_LABEL: &str = "Preparing…";

/// `FlowHandle` over the page's controller signal.
#[derive(Clone, Copy, Debug)]
pub struct FlowSignal(pub RwSignal<LinkController>);

impl FlowHandle for FlowSignal {
    fn with_flow<R>(&self, f: impl FnOnce(&mut LinkController) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Readiness reported by the hosted widget for the current token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub ready: bool,
}

/// Label of the link/relink button.
#[must_use]
pub fn link_button_label(loading: bool, bank_linked: bool) -> &'static str {
    match (loading, bank_linked) {
        (true, _) => PREPARING_LABEL,
        (false, true) => "Relink bank account",
        (false, false) => "Link bank account",
    }
}

/// Inline error text to show, if any.
#[must_use]
pub fn visible_error(ctrl: &LinkController) -> Option<String> {
    ctrl.last_error().filter(|msg| !msg.is_empty()).map(str::to_owned)
}
