//! HTTP handlers, one module per resource.

pub mod asset;
pub mod category;
