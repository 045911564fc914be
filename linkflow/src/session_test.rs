use super::test_helpers::MemorySession;
use super::*;

fn user(role: &str) -> SessionUser {
    SessionUser { user_id: "u1".into(), user_role: role.to_owned() }
}

#[test]
fn admin_is_not_redirected() {
    assert!(!requires_redirect(Some(&user("admin"))));
}

#[test]
fn other_roles_are_redirected() {
    for role in ["user", "buyer", "seller", "Admin", "ADMIN", "", "admin "] {
        assert!(requires_redirect(Some(&user(role))), "role {role:?} should redirect");
    }
}

#[test]
fn missing_user_is_redirected() {
    assert!(requires_redirect(None));
}

#[test]
fn current_user_id_reads_session_user() {
    let session = MemorySession::with_user("abc", "admin");
    assert_eq!(session.current_user_id(), Some(UserId::from("abc")));
}

#[test]
fn empty_user_id_counts_as_missing() {
    let session = MemorySession::with_user("", "admin");
    assert_eq!(session.current_user_id(), None);
    assert_eq!(MemorySession::default().current_user_id(), None);
}

#[test]
fn session_user_deserializes_from_persisted_shape() {
    let user: SessionUser = serde_json::from_str(r#"{"user_id":"42","user_role":"admin","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.user_id, "42");
    assert!(user.is_privileged());
}

#[test]
fn numeric_user_id_is_kept_as_number() {
    let user: SessionUser = serde_json::from_str(r#"{"user_id":36,"user_role":"admin"}"#).unwrap();
    assert_eq!(user.user_id, UserId::from(36_u64));
    assert_eq!(user.user_id.to_string(), "36");
    assert_eq!(serde_json::to_value(&user.user_id).unwrap(), serde_json::json!(36));
}

#[test]
fn numeric_user_id_is_never_empty() {
    let session = MemorySession::default();
    *session.user.borrow_mut() = Some(SessionUser { user_id: UserId::from(0_u64), user_role: "admin".to_owned() });
    assert_eq!(session.current_user_id(), Some(UserId::from(0_u64)));
}

#[test]
fn string_user_id_stays_a_string() {
    let id: UserId = serde_json::from_str(r#""36""#).unwrap();
    assert_eq!(id, UserId::Text("36".to_owned()));
    assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("36"));
}
