use super::*;
use serde_json::json;

fn records(n: usize) -> Vec<EscrowRecord> {
    (0..n).map(|i| EscrowRecord(json!({ "id": i, "name": format!("Lot {i}") }))).collect()
}

#[test]
fn default_state_is_empty() {
    let state = EscrowState::default();
    assert!(state.records.is_empty());
    assert_eq!(state.count_label(), "0 properties");
}

#[test]
fn successful_fetch_keeps_records_unmodified() {
    let fetched = records(3);
    let mut state = EscrowState::default();
    state.apply(Ok(fetched.clone()));
    assert_eq!(state.records, fetched);
    assert_eq!(state.count_label(), "3 properties");
}

#[test]
fn failed_fetch_degrades_to_empty_list() {
    let mut state = EscrowState::default();
    state.apply(Err(ApiError::Network("Network Error".to_owned())));
    assert!(state.records.is_empty());
    assert_eq!(state.count_label(), "0 properties");
}

#[test]
fn empty_listing_renders_zero() {
    let mut state = EscrowState::default();
    state.apply(Ok(Vec::new()));
    assert_eq!(state.count_label(), "0 properties");
}

#[test]
fn failed_refetch_drops_previous_records() {
    let mut state = EscrowState::default();
    state.apply(Ok(records(2)));
    state.apply(Err(ApiError::from_status(500, "")));
    assert_eq!(state, EscrowState::default());
    assert_eq!(state.count_label(), "0 properties");
}
