//! Auth Provider API Client
//!
//! This module provides the interface the settings page uses to talk to the
//! backend. The page only depends on the `AuthProviderApi` trait, so tests
//! can substitute a scripted implementation for the browser client.

mod http;

pub use http::HttpClient;

use std::rc::Rc;

use async_trait::async_trait;
use orgauth_shared::{
    AuthProvider, ConfigureProviderRequest, ConfigureProviderResponse, DisableProviderRequest,
    Organization, SendRemindersRequest,
};

/// Error types for API client operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Shared handle to the API client, provided through Leptos context
pub type ApiHandle = Rc<dyn AuthProviderApi>;

/// Organization-scoped auth provider endpoints
#[async_trait(?Send)]
pub trait AuthProviderApi {
    /// Load the organization as seen by the current viewer
    async fn get_organization(&self, slug: &str) -> Result<Organization, ApiError>;

    /// List every provider type available to the organization
    async fn list_providers(&self, slug: &str) -> Result<Vec<AuthProvider>, ApiError>;

    /// Get the configured provider, `None` when SSO is not set up
    async fn get_provider(&self, slug: &str) -> Result<Option<AuthProvider>, ApiError>;

    /// Begin configuring a provider
    async fn configure_provider(
        &self,
        slug: &str,
        request: &ConfigureProviderRequest,
    ) -> Result<ConfigureProviderResponse, ApiError>;

    /// Remove the configured provider
    async fn disable_provider(
        &self,
        slug: &str,
        request: &DisableProviderRequest,
    ) -> Result<(), ApiError>;

    /// Send link reminders to members
    async fn send_reminders(
        &self,
        slug: &str,
        request: &SendRemindersRequest,
    ) -> Result<(), ApiError>;
}
