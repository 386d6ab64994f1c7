//! Client-side state modules.

pub mod session;
