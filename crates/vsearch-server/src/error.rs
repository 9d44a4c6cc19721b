//! Domain error to HTTP response mapping

use rocket::http::Status;
use rocket::serde::json::Json;
use tracing::{error, info};
use vsearch_domain::error::Error;

use crate::constants::{ERROR_INVALID_REQUEST, ERROR_NOT_FOUND};
use crate::models::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// Map a domain error to a status and body
///
/// Validation errors become 400 with their message, missing resources 404,
/// and everything else 500 labelled with `failure`.
pub fn api_error(err: &Error, failure: &str) -> ApiError {
    match err {
        Error::InvalidArgument { message } => {
            info!(error = %message, "rejected request");
            (
                Status::BadRequest,
                Json(ErrorResponse::new(ERROR_INVALID_REQUEST, message.clone())),
            )
        }
        Error::NotFound { resource } => (
            Status::NotFound,
            Json(ErrorResponse::new(
                ERROR_NOT_FOUND,
                format!("{resource} not found"),
            )),
        ),
        other => {
            error!(error = %other, "{failure}");
            (
                Status::InternalServerError,
                Json(ErrorResponse::new(failure, other.to_string())),
            )
        }
    }
}
