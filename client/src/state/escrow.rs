//! Escrow listing state.
//!
//! DESIGN
//! ======
//! The listing is fetched once per page visit. A failed fetch is logged and
//! leaves the list empty; the page never shows an error for it.

#[cfg(test)]
#[path = "escrow_test.rs"]
mod escrow_test;

use linkflow::ApiError;

use crate::net::types::EscrowRecord;

/// Records shown on the escrow page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EscrowState {
    pub records: Vec<EscrowRecord>,
}

impl EscrowState {
    /// Apply the outcome of the listing fetch.
    pub fn apply(&mut self, result: Result<Vec<EscrowRecord>, ApiError>) {
        match result {
            Ok(records) => self.records = records,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("escrow: listing fetch failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                self.records.clear();
            }
        }
    }

    /// Header text, e.g. `"3 properties"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} properties", self.records.len())
    }
}
