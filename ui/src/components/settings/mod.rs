//! Settings Components
//!
//! - `organization_auth`: SSO provider selection for an organization

mod organization_auth;

pub use organization_auth::*;
