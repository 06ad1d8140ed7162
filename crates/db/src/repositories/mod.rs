//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. This layer is the only
//! place SQL lives; handlers depend on it, never on raw queries.

pub mod asset_repo;
pub mod category_repo;

pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
