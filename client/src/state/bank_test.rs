use super::*;
use linkflow::{ApiError, SessionStore, SessionUser};
use std::cell::Cell;

struct AdminSession {
    linked: Cell<bool>,
}

impl SessionStore for AdminSession {
    fn current_user(&self) -> Option<SessionUser> {
        Some(SessionUser { user_id: "u1".into(), user_role: "admin".to_owned() })
    }

    fn bank_linked(&self) -> bool {
        self.linked.get()
    }

    fn set_bank_linked(&self, linked: bool) {
        self.linked.set(linked);
    }
}

fn failed_with(err: ApiError) -> LinkController {
    let session = AdminSession { linked: Cell::new(false) };
    let mut ctrl = LinkController::new();
    let req = ctrl.begin_token_fetch(&session).unwrap();
    ctrl.finish_token_fetch(req.seq, Err(err));
    ctrl
}

// =============================================================
// link_button_label
// =============================================================

#[test]
fn label_while_loading_is_preparing() {
    assert_eq!(link_button_label(true, false), "Preparing…");
    assert_eq!(link_button_label(true, true), "Preparing…");
}

#[test]
fn label_depends_on_link_status() {
    assert_eq!(link_button_label(false, false), "Link bank account");
    assert_eq!(link_button_label(false, true), "Relink bank account");
}

// =============================================================
// visible_error
// =============================================================

#[test]
fn no_error_on_fresh_controller() {
    assert_eq!(visible_error(&LinkController::new()), None);
}

#[test]
fn backend_message_is_shown_verbatim() {
    let ctrl = failed_with(ApiError::from_status(400, r#"{"message":"insufficient funds"}"#));
    assert_eq!(visible_error(&ctrl), Some("insufficient funds".to_owned()));
}

#[test]
fn empty_message_is_hidden() {
    let ctrl = failed_with(ApiError::from_status(400, r#"{"message":""}"#));
    assert_eq!(visible_error(&ctrl), None);
}

#[test]
fn widget_state_defaults_to_not_ready() {
    assert!(!WidgetState::default().ready);
}
