//! Local list state over the typed client.
//!
//! Mirrors the single-page client's flow: load the collections, keep
//! them locally, and refresh after each successful mutation. Any failed
//! call leaves the cached state exactly as it was (no partial apply); an
//! empty collection is a valid, non-error state.

use inventory_core::types::DbId;

use crate::api::{ClientError, InventoryApi};
use crate::model::{Asset, AssetInput, Category};

/// Cached view of the server's categories and assets.
///
/// Each method issues one outstanding request per user action; duplicate
/// submissions are not deduplicated here, matching the server contract.
pub struct AssetCatalog {
    api: InventoryApi,
    categories: Vec<Category>,
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Create an empty catalog over the given API client. Call
    /// [`refresh`](Self::refresh) to load the initial state.
    pub fn new(api: InventoryApi) -> Self {
        Self {
            api,
            categories: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// The cached category list.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The cached asset list, each with its resolved category.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Reload both collections from the server.
    ///
    /// The cache is replaced only after both fetches succeed.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let categories = self.api.list_categories().await?;
        let assets = self.api.list_assets().await?;
        tracing::debug!(
            categories = categories.len(),
            assets = assets.len(),
            "Catalog refreshed"
        );
        self.categories = categories;
        self.assets = assets;
        Ok(())
    }

    /// Create an asset and refresh the local list on success.
    pub async fn create_asset(&mut self, input: &AssetInput) -> Result<Asset, ClientError> {
        let created = self.api.create_asset(input).await?;
        self.assets = self.api.list_assets().await?;
        Ok(created)
    }

    /// Replace an asset and refresh the local list on success.
    pub async fn update_asset(&mut self, id: DbId, input: &AssetInput) -> Result<(), ClientError> {
        self.api.update_asset(id, input).await?;
        self.assets = self.api.list_assets().await?;
        Ok(())
    }

    /// Delete an asset and refresh the local list on success.
    pub async fn delete_asset(&mut self, id: DbId) -> Result<(), ClientError> {
        self.api.delete_asset(id).await?;
        self.assets = self.api.list_assets().await?;
        Ok(())
    }
}
