//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the seam between session reconciliation and the HTTP
//! stack, and `api` holds the relay endpoints plus the browser implementation.

pub mod api;
pub mod transport;
