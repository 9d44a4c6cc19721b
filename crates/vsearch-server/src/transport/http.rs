//! HTTP transport
//!
//! Rocket application for the visual search API.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness text |
//! | GET | `/health` | Liveness JSON |
//! | GET | `/vs/health` | Embedding status and product count |
//! | GET | `/vs/products` | List products |
//! | POST | `/vs/products` | Add a product |
//! | DELETE | `/vs/products/<id>` | Delete a product |
//! | POST | `/vs/search` | Image → image search |
//! | POST | `/vs/search/text` | Text → image search |

use rocket::data::{ByteUnit, Limits};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket, catchers, routes};
use tracing::info;
use vsearch_domain::error::{Error, Result};
use vsearch_infrastructure::config::ServerConfig;
use vsearch_infrastructure::di::AppContext;

use crate::constants::{API_PREFIX, CORS_ALLOWED_METHODS};
use crate::handlers;

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOWED_METHODS,
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Rocket configuration for `server`
fn rocket_figment(server: &ServerConfig) -> Figment {
    let limits = Limits::default().limit("json", ByteUnit::from(server.json_limit_bytes));
    rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port))
        .merge(("limits", limits))
}

/// Build the Rocket application around an initialized context
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    let server = context.config.server.clone();

    let mut rocket = rocket::custom(rocket_figment(&server))
        .manage(context)
        .mount("/", routes![handlers::index, handlers::liveness, handlers::preflight])
        .mount(
            API_PREFIX,
            routes![
                handlers::health,
                handlers::list_products,
                handlers::add_product,
                handlers::delete_product,
                handlers::search_by_image,
                handlers::search_by_text,
            ],
        )
        .register(
            "/",
            catchers![
                handlers::bad_request,
                handlers::not_found,
                handlers::payload_too_large,
                handlers::unprocessable,
                handlers::internal_error,
            ],
        );

    if server.cors {
        rocket = rocket.attach(Cors);
    }

    rocket
}

/// HTTP server
pub struct HttpServer {
    context: AppContext,
}

impl HttpServer {
    /// Create a server for an initialized context
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    /// Serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<()> {
        let server = &self.context.config.server;
        info!(
            host = %server.host,
            port = server.port,
            "visual search API listening"
        );

        build_rocket(self.context)
            .launch()
            .await
            .map_err(|e| Error::internal(format!("HTTP server failed: {e}")))?;
        Ok(())
    }
}
