//! Domain Entities

/// Catalog product
pub mod product;

pub use product::{Product, ProductView};
