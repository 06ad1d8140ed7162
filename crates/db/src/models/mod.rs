//! Entity models and request DTOs.

pub mod asset;
pub mod category;
