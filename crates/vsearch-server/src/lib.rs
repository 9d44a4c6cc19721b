//! # Visual Search Server
//!
//! HTTP surface and command line for the visual search backend: vendors
//! upload product images, consumers find visually or semantically similar
//! products.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! // Providers register themselves when this crate is linked
//! extern crate vsearch_providers;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vsearch_server::run_server(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! [`build_rocket`] takes an already initialized
//! [`AppContext`](vsearch_infrastructure::di::AppContext), so tests can drive
//! the routes with Rocket's local client and offline providers.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod transport;

pub use init::{clear_catalog, load_config, run_server};
pub use transport::{HttpServer, build_rocket};
