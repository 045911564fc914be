//! Networking modules for the backend REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls through the host's `/api` forwarder and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
