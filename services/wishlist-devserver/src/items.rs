use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;
use wl_api_types::{CreateItemRequest, RenameItemRequest, WishlistItem, WishlistItemQuery};

use crate::{
    AppState, ApiResult, bad_request, conflict, json_body, not_found, path_params,
    query_params,
};

fn item_not_found(wishlist_id: i64, product_id: i64) -> crate::ApiError {
    not_found(format!(
        "The wishlist-product tuple ({wishlist_id},{product_id}) you are looking for was not found."
    ))
}

fn wishlist_not_found(wishlist_id: i64) -> crate::ApiError {
    not_found(format!("Wishlist with id '{wishlist_id}' was not found."))
}

pub(crate) async fn add_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let wishlist_id = path_params(path)?;
    let request = json_body(payload)?;
    info!("Request to add item into wishlist {}", wishlist_id);

    let Some(product_id) = request.product_id else {
        return Err(bad_request("Invalid Wishlist-Product: missing product_id"));
    };
    if request.product_name.is_empty() {
        return Err(bad_request("Invalid Wishlist-Product: missing product_name"));
    }

    let mut store = state.store.write().await;
    if store.wishlist(wishlist_id).is_none() {
        return Err(wishlist_not_found(wishlist_id));
    }
    if store.item(wishlist_id, product_id).is_some() {
        return Err(conflict(format!(
            "Product {product_id} is already in wishlist {wishlist_id}."
        )));
    }

    let item = store.add_item(wishlist_id, product_id, request.product_name);
    let location = format!("/wishlists/{wishlist_id}/items/{product_id}");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response())
}

pub(crate) async fn list_items(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<WishlistItemQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<WishlistItem>>> {
    let wishlist_id = path_params(path)?;
    let query = query_params(query)?;
    info!("Querying items of wishlist {}: {:?}", wishlist_id, query);

    let store = state.store.read().await;
    if store.wishlist(wishlist_id).is_none() {
        return Err(wishlist_not_found(wishlist_id));
    }

    let items = store
        .items(wishlist_id)
        .filter(|i| query.wishlist_id.is_none_or(|w| i.wishlist_id == w))
        .filter(|i| query.product_id.is_none_or(|p| i.product_id == p))
        .filter(|i| {
            query
                .product_name
                .as_ref()
                .is_none_or(|name| &i.product_name == name)
        })
        .cloned()
        .collect();

    Ok(Json(items))
}

pub(crate) async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<WishlistItem>> {
    let (wishlist_id, product_id) = path_params(path)?;
    info!("Request for {} item in wishlist {}", product_id, wishlist_id);
    let store = state.store.read().await;
    store
        .item(wishlist_id, product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| item_not_found(wishlist_id, product_id))
}

pub(crate) async fn rename_item(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<RenameItemRequest>, JsonRejection>,
) -> ApiResult<Json<WishlistItem>> {
    let (wishlist_id, product_id) = path_params(path)?;
    let request = json_body(payload)?;
    info!("Request to rename item {} in wishlist {}", product_id, wishlist_id);

    if request.product_name.is_empty() {
        return Err(bad_request("Invalid Wishlist-Product: missing product_name"));
    }

    let mut store = state.store.write().await;
    let item = store
        .item_mut(wishlist_id, product_id)
        .ok_or_else(|| item_not_found(wishlist_id, product_id))?;
    item.product_name = request.product_name;

    Ok(Json(item.clone()))
}

/// Always 204, whether or not the item existed.
pub(crate) async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let (wishlist_id, product_id) = path_params(path)?;
    info!("Request to delete item {} from wishlist {}", product_id, wishlist_id);
    state.store.write().await.remove_item(wishlist_id, product_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Moves the item out of the wishlist and returns it. The stub has no cart,
/// so the item is only removed.
pub(crate) async fn add_to_cart(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<WishlistItem>> {
    let (wishlist_id, product_id) = path_params(path)?;
    info!("Request to move item {} of wishlist {} to cart", product_id, wishlist_id);
    state
        .store
        .write()
        .await
        .remove_item(wishlist_id, product_id)
        .map(Json)
        .ok_or_else(|| item_not_found(wishlist_id, product_id))
}
