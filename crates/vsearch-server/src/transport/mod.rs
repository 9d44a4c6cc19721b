//! Transport layer

pub mod http;

pub use http::{Cors, HttpServer, build_rocket};
