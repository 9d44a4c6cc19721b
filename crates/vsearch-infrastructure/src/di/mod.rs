//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into wired services.
//! Providers come from the linkme registries; they are linked in when the
//! binary depends on `vsearch-providers`.

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app, init_test_app};
