//! Development stand-in for the wishlist REST API.
//!
//! Keeps everything in memory and serves the console's static assets, so the
//! console can be exercised without the real service.

mod items;
mod store;
mod wishlists;

use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    handler::HandlerWithoutStateExt,
    http::{Method, StatusCode, Uri},
    routing::{get, put},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::warn;
use wl_api_types::{ErrorResponse, ServiceInfo};

pub use store::Store;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);
pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Build the API router. When `static_dir` is set, unmatched paths are served
/// from it (the console page lives at `/`). Anything else answers with the
/// JSON error body.
pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/info", get(info))
        .route("/health", get(health))
        .route(
            "/wishlists",
            get(wishlists::query_wishlists).post(wishlists::create_wishlist),
        )
        .route(
            "/wishlists/{wishlist_id}",
            put(wishlists::rename_wishlist).delete(wishlists::delete_wishlist),
        )
        .route(
            "/wishlists/{wishlist_id}/items",
            get(items::list_items).post(items::add_item),
        )
        .route(
            "/wishlists/{wishlist_id}/items/{product_id}",
            get(items::get_item)
                .put(items::rename_item)
                .delete(items::delete_item),
        )
        .route(
            "/wishlists/{wishlist_id}/items/{product_id}/add-to-cart",
            put(items::add_to_cart),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    let app = match static_dir {
        Some(dir) => {
            let missing = route_not_found.into_service();
            api.fallback_service(ServeDir::new(dir).not_found_service(missing))
        }
        None => api.fallback(route_not_found),
    };

    app.layer(CorsLayer::permissive())
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Wishlist REST API Service".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "service": "wishlist-devserver", "status": "ok" }))
}

async fn route_not_found(uri: Uri) -> ApiError {
    not_found(format!("The requested URL {uri} was not found on the server."))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    error(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("The method {method} is not allowed for the requested URL {uri}."),
    )
}

pub(crate) fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    let message = message.into();
    warn!("{}: {}", status, message);
    (
        status,
        Json(ErrorResponse {
            status: Some(status.as_u16()),
            error: status.canonical_reason().map(ToOwned::to_owned),
            message: Some(message),
        }),
    )
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    error(StatusCode::BAD_REQUEST, message)
}

pub(crate) fn not_found(message: impl Into<String>) -> ApiError {
    error(StatusCode::NOT_FOUND, message)
}

pub(crate) fn conflict(message: impl Into<String>) -> ApiError {
    error(StatusCode::CONFLICT, message)
}

/// Unwrap a JSON body, answering 415 when the content type is wrong.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        )),
        Err(rejection) => Err(bad_request(rejection.body_text())),
    }
}

/// Ids in the path must be integers; anything else is an unknown resource.
pub(crate) fn path_params<T>(path: Result<Path<T>, PathRejection>) -> ApiResult<T> {
    path.map(|Path(p)| p)
        .map_err(|rejection| not_found(rejection.body_text()))
}

pub(crate) fn query_params<T>(
    query: Result<axum::extract::Query<T>, QueryRejection>,
) -> ApiResult<T> {
    query
        .map(|axum::extract::Query(q)| q)
        .map_err(|rejection| bad_request(rejection.body_text()))
}
