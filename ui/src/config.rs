//! Console Configuration
//!
//! Settings are derived from the page origin and can be overridden by a JSON
//! object stored in `localStorage` under [`STORAGE_KEY`]:
//!
//! ```json
//! { "api_base_url": "https://api.example.com/api/0", "customer_domain": true }
//! ```

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// localStorage key holding configuration overrides
pub const STORAGE_KEY: &str = "orgauth.config";

/// Origin used when the window origin cannot be read
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// API mount point relative to the origin
const API_PREFIX: &str = "/api/0";

const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Runtime configuration for the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL for all API requests
    pub api_base_url: String,

    /// Organization is served from its own domain, so UI paths drop the
    /// `/organizations/<slug>` prefix
    pub customer_domain: bool,

    /// How long notifications stay on screen
    pub toast_duration_ms: u32,
}

/// Partial configuration as stored in localStorage
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub customer_domain: Option<bool>,
    pub toast_duration_ms: Option<u32>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_origin(FALLBACK_ORIGIN)
    }
}

impl ConsoleConfig {
    /// Defaults for a console served from `origin`
    pub fn from_origin(origin: &str) -> Self {
        Self {
            api_base_url: format!("{}{}", origin.trim_end_matches('/'), API_PREFIX),
            customer_domain: false,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    /// Load configuration for the current page
    pub fn load() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
        let config = Self::from_origin(&origin);

        match LocalStorage::get::<ConfigOverrides>(STORAGE_KEY) {
            Ok(overrides) => config.apply(overrides),
            Err(StorageError::KeyNotFound(_)) => config,
            Err(e) => {
                warn!("Ignoring stored console config: {}", e);
                config
            }
        }
    }

    /// Apply stored overrides on top of this configuration
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(customer_domain) = overrides.customer_domain {
            self.customer_domain = customer_domain;
        }
        if let Some(duration) = overrides.toast_duration_ms {
            self.toast_duration_ms = duration;
        }
        self
    }

    /// Rewrite an organization-scoped UI path for the current domain mode.
    ///
    /// With customer domains enabled, `/organizations/<slug>/auth/configure/`
    /// becomes `/auth/configure/`. Other paths are returned unchanged.
    pub fn normalize_url(&self, path: &str) -> String {
        if !self.customer_domain {
            return path.to_string();
        }

        let Some(rest) = path.strip_prefix("/organizations/") else {
            return path.to_string();
        };
        match rest.find('/') {
            Some(idx) => rest[idx..].to_string(),
            None => "/".to_string(),
        }
    }
}
