//! Auth provider API surface
//!
//! Organization-scoped endpoint paths and the JSON bodies exchanged with the
//! backend. Paths are relative to the API base URL and always carry a
//! trailing slash, which the backend router requires.

use serde::{Deserialize, Serialize};

use crate::provider::AuthProvider;

fn organization_prefix(slug: &str) -> String {
    format!("/organizations/{}", urlencoding::encode(slug))
}

/// `GET` - organization details for the current viewer
pub fn organization_path(slug: &str) -> String {
    format!("{}/", organization_prefix(slug))
}

/// `GET` - every provider type available to the organization
pub fn auth_providers_path(slug: &str) -> String {
    format!("{}/auth-providers/", organization_prefix(slug))
}

/// `GET` / `POST` / `DELETE` - the organization's configured provider
pub fn auth_provider_path(slug: &str) -> String {
    format!("{}/auth-provider/", organization_prefix(slug))
}

/// `POST` - email members who have not linked their identity yet
pub fn send_reminders_path(slug: &str) -> String {
    format!("{}/auth-provider/send-reminders/", organization_prefix(slug))
}

/// Server-rendered configuration page for an already configured provider
pub fn auth_configure_path(slug: &str) -> String {
    format!("{}/auth/configure/", organization_prefix(slug))
}

/// Body for `POST auth-provider/`: begin configuring a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigureProviderRequest {
    /// Full descriptor, as received from `auth-providers/`
    pub provider: AuthProvider,
    pub init: bool,
}

impl ConfigureProviderRequest {
    pub fn new(provider: AuthProvider) -> Self {
        Self {
            provider,
            init: true,
        }
    }
}

/// Response of `POST auth-provider/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigureProviderResponse {
    /// Where to send the browser to start the identity provider handshake
    #[serde(default)]
    pub auth_url: Option<String>,
}

/// Body for `DELETE auth-provider/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisableProviderRequest {
    pub provider: AuthProvider,
}

impl DisableProviderRequest {
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider }
    }
}

/// Body for `POST auth-provider/send-reminders/`.
///
/// Always empty; the backend resolves the provider from the organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendRemindersRequest {}
