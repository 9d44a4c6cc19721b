//! Application Layer - Visual Search Backend
//!
//! Implements the use cases of the visual search backend and orchestrates
//! domain rules according to Clean Architecture principles.
//!
//! ## Use Cases
//!
//! - Image → image and text → image search (`SearchServiceImpl`)
//! - Product catalog management (`CatalogServiceImpl`)
//! - Embedding health reporting with a TTL cache (`HealthServiceImpl`)
//!
//! ## Ports
//!
//! - `ports::registry::*`: linkme registries that providers submit to
//! - `ports::services::*`: use case interfaces consumed by the server
//!
//! ## Dependencies
//!
//! This crate depends only on `vsearch-domain` and pure Rust libraries.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
