//! Browser HTTP Client
//!
//! `AuthProviderApi` over `gloo-net`, talking to the backend's REST API.

use gloo_net::http::{Request, Response};
use orgauth_shared::{
    auth_provider_path, auth_providers_path, organization_path, send_reminders_path,
    AuthProvider, ConfigureProviderRequest, ConfigureProviderResponse, DisableProviderRequest,
    Organization, SendRemindersRequest,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, AuthProviderApi};

/// Client for the organization auth provider endpoints
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// API base URL, without trailing slash
    base_url: String,
}

impl HttpClient {
    /// Create a new client
    pub fn new(base_url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject non-2xx responses
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            response.status_text()
        } else {
            body
        };
        Err(ApiError::RequestFailed { status, message })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Decode a body that may be empty (204) or `null`
    async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Self::check(response).await
    }
}

#[async_trait::async_trait(?Send)]
impl AuthProviderApi for HttpClient {
    async fn get_organization(&self, slug: &str) -> Result<Organization, ApiError> {
        let response = self.get(&organization_path(slug)).await?;
        Self::decode(response).await
    }

    async fn list_providers(&self, slug: &str) -> Result<Vec<AuthProvider>, ApiError> {
        let response = self.get(&auth_providers_path(slug)).await?;
        Self::decode(response).await
    }

    async fn get_provider(&self, slug: &str) -> Result<Option<AuthProvider>, ApiError> {
        let response = self.get(&auth_provider_path(slug)).await?;
        Self::decode_optional(response).await
    }

    async fn configure_provider(
        &self,
        slug: &str,
        request: &ConfigureProviderRequest,
    ) -> Result<ConfigureProviderResponse, ApiError> {
        let url = self.url(&auth_provider_path(slug));
        debug!(%url, provider = %request.provider.key, "POST configure");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        let response = Self::check(response).await?;
        Ok(Self::decode_optional(response).await?.unwrap_or_default())
    }

    async fn disable_provider(
        &self,
        slug: &str,
        request: &DisableProviderRequest,
    ) -> Result<(), ApiError> {
        let url = self.url(&auth_provider_path(slug));
        debug!(%url, provider = %request.provider.key, "DELETE provider");

        let response = Request::delete(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Self::check(response).await.map(|_| ())
    }

    async fn send_reminders(
        &self,
        slug: &str,
        request: &SendRemindersRequest,
    ) -> Result<(), ApiError> {
        let url = self.url(&send_reminders_path(slug));
        debug!(%url, "POST send-reminders");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Self::check(response).await.map(|_| ())
    }
}
