//! Backend error type and the message shown to the user on failure.
//!
//! ERROR HANDLING
//! ==============
//! The displayed message is chosen in a fixed order: the backend's structured
//! `message` string, then the error's own text, then a fallback naming the
//! operation that failed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when a link-token request fails without any message.
pub const TOKEN_FETCH_FALLBACK: &str = "Failed to create Plaid link";

/// Fallback shown when a public-token exchange fails without any message.
pub const EXCHANGE_FALLBACK: &str = "Failed to link bank account";

/// Failure of a call to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    ///
    /// `message` holds the body's `message` field when it was a JSON string.
    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: body_message(body) }
    }

    /// Structured message supplied by the backend, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Extract `message` from a JSON body when it is a string.
///
/// Non-JSON bodies and non-string `message` values yield `None`.
#[must_use]
pub fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

/// Pick the message displayed for `err`.
#[must_use]
pub fn user_facing_message(err: &ApiError, fallback: &str) -> String {
    if let Some(message) = err.backend_message() {
        return message.to_owned();
    }
    let native = err.to_string();
    if native.is_empty() { fallback.to_owned() } else { native }
}
