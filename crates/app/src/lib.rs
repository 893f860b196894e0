//! Shared application domain and service modules.

pub mod context;
pub mod domain;
