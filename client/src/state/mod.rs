//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `bank`, `escrow`) so individual pages
//! can depend on small focused models.

pub mod auth;
pub mod bank;
pub mod escrow;
