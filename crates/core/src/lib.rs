//! Shared domain types and the error taxonomy used across the inventory
//! service crates.

pub mod error;
pub mod types;
