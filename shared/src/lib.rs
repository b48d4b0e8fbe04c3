//! Shared types for the organization auth settings console
//!
//! This crate contains the wire-level model used by the UI:
//! - SSO provider descriptors and active-provider lookup
//! - Organization context (access scopes, feature flags)
//! - Endpoint paths and request/response payloads

pub mod api;
pub mod organization;
pub mod provider;

pub use api::*;
pub use organization::*;
pub use provider::*;
