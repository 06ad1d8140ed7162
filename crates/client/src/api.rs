//! REST API client for the inventory endpoints.
//!
//! Wraps the server's `/api` surface using [`reqwest`]. Each method maps
//! to exactly one HTTP call; a non-2xx status is folded into
//! [`ClientError::Api`] with the raw body kept for display.

use inventory_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::model::{Asset, AssetInput, Category};

/// HTTP client for a single inventory API server.
pub struct InventoryApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for display.
        body: String,
    },

    /// The payload failed the client-side mirror validation; no request
    /// was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Update payload: the target id plus the replacement fields, matching
/// the server's full-record-replace contract.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePayload<'a> {
    id: DbId,
    #[serde(flatten)]
    input: &'a AssetInput,
}

impl InventoryApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Server base URL without the `/api` suffix, e.g.
    ///   `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across several consumers).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// GET /api/categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/categories", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /api/categories/{id}
    pub async fn get_category(&self, id: DbId) -> Result<Category, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/categories/{id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /api/assets
    pub async fn list_assets(&self) -> Result<Vec<Asset>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/assets", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /api/assets/{id}
    pub async fn get_asset(&self, id: DbId) -> Result<Asset, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/assets/{id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// POST /api/assets -- returns the created record.
    ///
    /// Runs the mirror validation first; an invalid payload fails fast
    /// with [`ClientError::Validation`] and never reaches the wire.
    pub async fn create_asset(&self, input: &AssetInput) -> Result<Asset, ClientError> {
        input.validate()?;
        let response = self
            .client
            .post(format!("{}/api/assets", self.base_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// PUT /api/assets/{id} -- full-record replace, no response body.
    pub async fn update_asset(&self, id: DbId, input: &AssetInput) -> Result<(), ClientError> {
        input.validate()?;
        let payload = UpdatePayload { id, input };
        let response = self
            .client
            .put(format!("{}/api/assets/{id}", self.base_url))
            .json(&payload)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// DELETE /api/assets/{id}
    pub async fn delete_asset(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/api/assets/{id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Deserialize a 2xx response body, or fold the failure into
    /// [`ClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// Check a no-body response for success.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
