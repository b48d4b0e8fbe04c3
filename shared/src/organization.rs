//! Organization context
//!
//! The slice of the organization resource the auth settings page needs:
//! its slug, the viewer's access scopes and the enabled feature flags.

use serde::{Deserialize, Serialize};

/// Access scope required to change the organization's auth provider
pub const ORG_WRITE: &str = "org:write";

/// Organization as seen by the current viewer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub slug: String,

    #[serde(default)]
    pub name: String,

    /// Scopes the viewer holds on this organization (e.g. "org:write")
    #[serde(default)]
    pub access: Vec<String>,

    /// Feature flags enabled for this organization
    #[serde(default)]
    pub features: Vec<String>,
}

impl Organization {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_access(mut self, scope: impl Into<String>) -> Self {
        self.access.push(scope.into());
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn has_access(&self, scope: &str) -> bool {
        self.access.iter().any(|s| s == scope)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Whether the viewer may configure or remove the auth provider
    pub fn can_write(&self) -> bool {
        self.has_access(ORG_WRITE)
    }
}
