//! Reusable UI components shared by pages.
//!
//! DESIGN
//! ======
//! Components stay presentation-focused; pages own data fetching and flow
//! control.

pub mod escrow_list;
pub mod plaid_link;
