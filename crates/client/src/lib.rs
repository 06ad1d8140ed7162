//! Typed HTTP client for the inventory API.
//!
//! [`InventoryApi`] wraps the REST endpoints with typed methods;
//! [`AssetCatalog`] layers the single-page client's local list state on
//! top of it. The client mirrors the server's field validation before
//! sending, purely as a UX optimization -- the server remains
//! authoritative.

pub mod api;
pub mod catalog;
pub mod model;

pub use api::{ClientError, InventoryApi};
pub use catalog::AssetCatalog;
