use super::*;
use linkflow::UserId;
use serde_json::json;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.bank_linked);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_storage_is_logged_out() {
    assert_eq!(AuthState::load(), AuthState::default());
}

// =============================================================
// Persisted envelope
// =============================================================

#[test]
fn from_persisted_reads_user_and_link_flag() {
    let raw = r#"{"state":{"userLoggedIn":{"user_id":"7","user_role":"admin"},"bankLinked":true},"version":0}"#;
    let persisted: PersistedAuth = serde_json::from_str(raw).unwrap();
    let state = AuthState::from_persisted(persisted);
    assert_eq!(state.user.as_ref().map(|u| u.user_id.clone()), Some(UserId::from("7")));
    assert!(state.bank_linked);
    assert!(!state.loading);
}

#[test]
fn from_persisted_tolerates_missing_fields() {
    let persisted: PersistedAuth = serde_json::from_str(r#"{"state":{}}"#).unwrap();
    assert_eq!(AuthState::from_persisted(persisted), AuthState::default());
}

#[test]
fn persisted_round_trip_keeps_session() {
    let state = AuthState {
        user: Some(SessionUser { user_id: "u1".into(), user_role: "user".to_owned() }),
        bank_linked: true,
        loading: false,
    };
    let json = serde_json::to_value(state.to_persisted()).unwrap();
    assert_eq!(json["state"]["bankLinked"], serde_json::json!(true));
    assert_eq!(json["state"]["userLoggedIn"]["user_role"], serde_json::json!("user"));

    let back: PersistedAuth = serde_json::from_value(json).unwrap();
    assert_eq!(AuthState::from_persisted(back), state);
}

#[test]
fn from_persisted_accepts_numeric_user_id() {
    let raw = r#"{"state":{"userLoggedIn":{"user_id":36,"user_role":"admin"},"bankLinked":false},"version":0}"#;
    let persisted: PersistedAuth = serde_json::from_str(raw).unwrap();
    let state = AuthState::from_persisted(persisted);
    let user = state.user.expect("numeric id should still yield a user");
    assert_eq!(user.user_id, UserId::from(36_u64));
    assert!(user.is_privileged());
}

// =============================================================
// Writing the linked flag
// =============================================================

#[test]
fn merged_into_only_touches_bank_linked() {
    let stored = json!({
        "state": {
            "userLoggedIn": { "user_id": "7", "user_role": "admin", "email": "a@b.c" },
            "token": "jwt-abc",
            "bankLinked": false
        },
        "version": 2
    });
    let persisted: PersistedAuth = serde_json::from_value(stored.clone()).unwrap();
    let mut state = AuthState::from_persisted(persisted);
    state.bank_linked = true;

    let written = state.merged_into(Some(stored));
    assert_eq!(
        written,
        json!({
            "state": {
                "userLoggedIn": { "user_id": "7", "user_role": "admin", "email": "a@b.c" },
                "token": "jwt-abc",
                "bankLinked": true
            },
            "version": 2
        })
    );
}

#[test]
fn merged_into_keeps_numeric_user_id() {
    let stored = json!({ "state": { "userLoggedIn": { "user_id": 36, "user_role": "admin" } }, "version": 1 });
    let state = AuthState { bank_linked: true, ..AuthState::default() };

    let written = state.merged_into(Some(stored));
    assert_eq!(written["state"]["userLoggedIn"]["user_id"], json!(36));
    assert_eq!(written["state"]["bankLinked"], json!(true));
    assert_eq!(written["version"], json!(1));
}

#[test]
fn merged_into_without_stored_entry_writes_full_envelope() {
    let state = AuthState {
        user: Some(SessionUser { user_id: "u1".into(), user_role: "admin".to_owned() }),
        bank_linked: true,
        loading: false,
    };
    assert_eq!(state.merged_into(None), serde_json::to_value(state.to_persisted()).unwrap());
}

#[test]
fn merged_into_replaces_malformed_entry() {
    let state = AuthState { bank_linked: true, ..AuthState::default() };
    let written = state.merged_into(Some(json!("garbage")));
    assert_eq!(written["state"]["bankLinked"], json!(true));
}
