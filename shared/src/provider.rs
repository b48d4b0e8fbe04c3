//! SSO provider types
//!
//! An `AuthProvider` describes one provider type the backend can configure
//! for an organization (e.g. "google", "saml2"). Descriptors are immutable
//! and only ever received from the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single SSO provider type available to an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    /// Provider identifier (e.g. "google", "saml2")
    pub key: String,

    /// Display name
    pub name: String,

    /// Organization feature that must be enabled to use this provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_feature: Option<String>,

    /// Whether enabling this provider turns off two-factor enforcement
    #[serde(default, rename = "disables2FA")]
    pub disables_2fa: bool,

    /// Remaining display metadata, kept as received
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl AuthProvider {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            required_feature: None,
            disables_2fa: false,
            metadata: Map::new(),
        }
    }

    pub fn with_required_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_feature = Some(feature.into());
        self
    }
}

/// Find the configured provider inside the provider catalog.
///
/// Matching is by key only. A configured provider that is missing from the
/// catalog yields `None` rather than an error.
pub fn find_active_provider<'a>(
    providers: &'a [AuthProvider],
    configured: Option<&AuthProvider>,
) -> Option<&'a AuthProvider> {
    let configured = configured?;
    providers.iter().find(|p| p.key == configured.key)
}
