use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("create_plaid_link"), "/api/create_plaid_link");
    assert_eq!(endpoint("/exchange_public_token"), "/api/exchange_public_token");
}

#[test]
fn escrow_endpoint_uses_scope() {
    assert_eq!(escrow_endpoint(ESCROW_SCOPE), "/api/escrow/36");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_fail_without_panicking() {
    let body = CreateLinkTokenRequest { user_id: "u1".into() };
    let err = futures::executor::block_on(HttpLinkBackend.create_link_token(&body)).unwrap_err();
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));

    let err = futures::executor::block_on(fetch_escrow_records(ESCROW_SCOPE)).unwrap_err();
    assert_eq!(err.to_string(), "not available on server");
}
