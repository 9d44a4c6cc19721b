//! Application Ports
//!
//! - `registry`: linkme registries providers submit themselves to
//! - `services`: use case interfaces consumed by the server

pub mod registry;
pub mod services;

pub use services::{
    CatalogServiceInterface, HealthReport, HealthServiceInterface, SearchServiceInterface,
};
