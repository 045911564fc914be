//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Link-flow DTOs come from `linkflow` so the state machine and the HTTP layer
//! agree on one schema. Escrow records stay opaque JSON; only the list
//! component peeks at display fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use linkflow::types::{CreateLinkTokenRequest, CreateLinkTokenResponse, ExchangePublicTokenRequest};

/// Keys tried, in order, when picking a record's display title.
const TITLE_KEYS: [&str; 4] = ["name", "title", "address", "property_name"];

/// An escrow entry as returned by `GET /escrow/{scope}`.
///
/// The backend owns the shape; the record is kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EscrowRecord(pub serde_json::Value);

impl EscrowRecord {
    /// Record identifier rendered as text, if present.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Human-readable title for list rendering.
    #[must_use]
    pub fn title(&self) -> String {
        TITLE_KEYS
            .iter()
            .find_map(|key| {
                self.0
                    .get(*key)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
            .map(str::to_owned)
            .or_else(|| self.id().map(|id| format!("Property #{id}")))
            .unwrap_or_else(|| "Untitled property".to_owned())
    }

    /// Optional status string, shown as a badge.
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.0
            .get("status")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }
}
