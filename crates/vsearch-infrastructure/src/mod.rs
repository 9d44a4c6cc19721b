//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the visual search backend.
//! Provider implementations live in `vsearch-providers` and are reached
//! through the linkme registries.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML, environment |
//! | [`constants`] | Infrastructure defaults and environment variable names |
//! | [`di`] | Composition root (`init_app`) |
//! | [`error_ext`] | Context extensions for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use error_ext::ErrorContext;
