//! Route handlers
//!
//! Thin adapters between JSON bodies and the application services held in
//! [`AppContext`].

use chrono::Utc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, State, catch, delete, get, options, post};
use tracing::{debug, info};
use vsearch_domain::value_objects::SearchOutcome;
use vsearch_infrastructure::di::AppContext;

use crate::constants::{
    EMBEDDINGS_CONNECTED, EMBEDDINGS_UNAVAILABLE, ERROR_INVALID_REQUEST, ERROR_NOT_FOUND,
    MESSAGE_PRODUCT_DELETED,
};
use crate::error::{ApiResult, api_error};
use crate::models::{
    AddProductRequest, DeleteResponse, ErrorResponse, HealthResponse, HealthServices,
    ImageSearchRequest, LivenessResponse, ProductListResponse, ProductResponse,
    TextSearchRequest, requested_top_k,
};

/// Plain liveness text
#[get("/")]
pub fn index() -> &'static str {
    "OK"
}

/// Process liveness, independent of any collaborator
#[get("/health")]
pub fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Embedding availability and catalog size
#[get("/health")]
pub async fn health(context: &State<AppContext>) -> ApiResult<Json<HealthResponse>> {
    let report = context
        .health()
        .check()
        .await
        .map_err(|e| api_error(&e, "Health check failed"))?;

    Ok(Json(HealthResponse {
        status: "ok",
        services: HealthServices {
            embeddings: if report.embeddings_available {
                EMBEDDINGS_CONNECTED
            } else {
                EMBEDDINGS_UNAVAILABLE
            },
        },
        product_count: report.product_count,
    }))
}

#[get("/products")]
pub async fn list_products(context: &State<AppContext>) -> ApiResult<Json<ProductListResponse>> {
    let products = context
        .catalog()
        .list_products()
        .await
        .map_err(|e| api_error(&e, "Failed to list products"))?;

    info!(count = products.len(), "listing products");
    Ok(Json(ProductListResponse { products }))
}

#[post("/products", data = "<request>")]
pub async fn add_product(
    context: &State<AppContext>,
    request: Json<AddProductRequest>,
) -> ApiResult<(Status, Json<ProductResponse>)> {
    let request = request.into_inner();
    let product = context
        .catalog()
        .add_product(
            request.name.as_deref().unwrap_or_default(),
            request.image_base64.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|e| api_error(&e, "Failed to add product"))?;

    info!(product_id = %product.id, "product added");
    Ok((Status::Created, Json(ProductResponse { product })))
}

#[delete("/products/<id>")]
pub async fn delete_product(
    context: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<DeleteResponse>> {
    context
        .catalog()
        .delete_product(id)
        .await
        .map_err(|e| api_error(&e, "Failed to delete product"))?;

    info!(product_id = id, "product deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: MESSAGE_PRODUCT_DELETED,
    }))
}

/// Image → image search
#[post("/search", data = "<request>")]
pub async fn search_by_image(
    context: &State<AppContext>,
    request: Json<ImageSearchRequest>,
) -> ApiResult<Json<SearchOutcome>> {
    let request = request.into_inner();
    let outcome = context
        .search()
        .search_by_image(
            request.image_base64.as_deref().unwrap_or_default(),
            requested_top_k(request.top_k),
        )
        .await
        .map_err(|e| api_error(&e, "Search failed"))?;

    log_outcome(&outcome);
    Ok(Json(outcome))
}

/// Text → image search
#[post("/search/text", data = "<request>")]
pub async fn search_by_text(
    context: &State<AppContext>,
    request: Json<TextSearchRequest>,
) -> ApiResult<Json<SearchOutcome>> {
    let request = request.into_inner();
    let outcome = context
        .search()
        .search_by_text(
            request.query.as_deref().unwrap_or_default(),
            requested_top_k(request.top_k),
        )
        .await
        .map_err(|e| api_error(&e, "Search failed"))?;

    log_outcome(&outcome);
    Ok(Json(outcome))
}

fn log_outcome(outcome: &SearchOutcome) {
    match outcome.results.first() {
        Some(top) => debug!(
            returned = outcome.results.len(),
            top_score = top.score,
            "search results"
        ),
        None => debug!("search returned no results"),
    }
}

/// CORS preflight for any path
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

// ============================================================================
// Catchers: keep error bodies JSON for failures raised by Rocket itself
// ============================================================================

#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        ERROR_INVALID_REQUEST,
        "Request body is not valid JSON",
    ))
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        ERROR_NOT_FOUND,
        format!("No route for {} {}", req.method(), req.uri()),
    ))
}

#[catch(413)]
pub fn payload_too_large(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        ERROR_INVALID_REQUEST,
        "Request body exceeds the size limit",
    ))
}

#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        ERROR_INVALID_REQUEST,
        "Request body has the wrong shape",
    ))
}

#[catch(500)]
pub fn internal_error(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal error", "Unexpected server error"))
}
