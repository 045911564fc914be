//! Wire DTOs for the link-token and exchange endpoints.

use serde::{Deserialize, Serialize};

use crate::session::UserId;

/// Body of `POST /create_plaid_link`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkTokenRequest {
    pub user_id: UserId,
}

/// Response of `POST /create_plaid_link`.
///
/// Only `link_token` is consumed; the other fields are passed through for
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkTokenResponse {
    pub link_token: String,
    #[serde(default)]
    pub expiration: String,
    #[serde(default)]
    pub request_id: String,
}

/// Body of `POST /exchange_public_token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangePublicTokenRequest {
    pub public_token: String,
    pub user_id: UserId,
}
