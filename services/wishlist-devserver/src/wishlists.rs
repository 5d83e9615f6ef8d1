use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;
use wl_api_types::{CreateWishlistRequest, RenameWishlistRequest, Wishlist, WishlistQuery};

use crate::{
    AppState, ApiResult, bad_request, json_body, not_found, path_params, query_params,
};

/// An id-only lookup answers with the object itself; every other search with
/// a list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum WishlistSearch {
    One(Wishlist),
    Many(Vec<Wishlist>),
}

pub(crate) async fn create_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<CreateWishlistRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let request = json_body(payload)?;
    info!("Request to create a wishlist: {:?}", request);

    if request.name.is_empty() {
        return Err(bad_request("Invalid request: missing name"));
    }
    let customer_id = match request.customer_id {
        Some(id) if id > 0 => id,
        _ => {
            return Err(bad_request(
                "Invalid request: Wrong customer_id. Expected a number > 0",
            ));
        }
    };

    let wishlist = state
        .store
        .write()
        .await
        .create_wishlist(request.name, customer_id);
    let location = format!("/wishlists/{}", wishlist.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(wishlist),
    )
        .into_response())
}

pub(crate) async fn query_wishlists(
    State(state): State<AppState>,
    query: Result<Query<WishlistQuery>, QueryRejection>,
) -> ApiResult<Json<WishlistSearch>> {
    let query = query_params(query)?;
    info!("Querying Wishlist list: {:?}", query);
    let store = state.store.read().await;

    if let (Some(id), None, None) = (query.id, &query.name, query.customer_id) {
        let wishlist = store
            .wishlist(id)
            .cloned()
            .ok_or_else(|| not_found(format!("Wishlist with id '{id}' was not found.")))?;
        return Ok(Json(WishlistSearch::One(wishlist)));
    }

    let found: Vec<Wishlist> = store
        .wishlists()
        .filter(|w| query.id.is_none_or(|id| w.id == id))
        .filter(|w| query.name.as_ref().is_none_or(|name| &w.name == name))
        .filter(|w| query.customer_id.is_none_or(|c| w.customer_id == c))
        .cloned()
        .collect();

    if found.is_empty() {
        return Err(not_found("Wishlist was not found."));
    }
    Ok(Json(WishlistSearch::Many(found)))
}

pub(crate) async fn rename_wishlist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RenameWishlistRequest>, JsonRejection>,
) -> ApiResult<Json<Wishlist>> {
    let wishlist_id = path_params(path)?;
    let request = json_body(payload)?;
    info!("Request to rename a wishlist with id: {}", wishlist_id);

    if request.name.is_empty() {
        return Err(bad_request("Invalid request: missing name"));
    }

    let mut store = state.store.write().await;
    let wishlist = store.wishlist_mut(wishlist_id).ok_or_else(|| {
        not_found(format!("Wishlist with id '{wishlist_id}' was not found."))
    })?;
    wishlist.name = request.name;

    Ok(Json(wishlist.clone()))
}

/// Always 204, whether or not the wishlist existed.
pub(crate) async fn delete_wishlist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let wishlist_id = path_params(path)?;
    info!("Request to delete wishlist with id: {}", wishlist_id);
    state.store.write().await.delete_wishlist(wishlist_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::test_support::call;
    use crate::{AppState, router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let app = router(AppState::default(), None);
        let (status, body) = call(
            &app,
            "POST",
            "/wishlists",
            Some(json!({"name": "Books", "customer_id": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "name": "Books", "customer_id": 7}));
    }

    #[tokio::test]
    async fn create_rejects_missing_name_and_bad_customer() {
        let app = router(AppState::default(), None);
        let (status, body) =
            call(&app, "POST", "/wishlists", Some(json!({"customer_id": 7}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request: missing name");

        let (status, body) = call(
            &app,
            "POST",
            "/wishlists",
            Some(json!({"name": "x", "customer_id": null})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap_or_default().contains("customer_id"));
    }

    #[tokio::test]
    async fn id_only_search_returns_object_and_filters_return_lists() {
        let app = router(AppState::default(), None);
        for (name, customer) in [("a", 1), ("b", 1), ("c", 2)] {
            call(
                &app,
                "POST",
                "/wishlists",
                Some(json!({"name": name, "customer_id": customer})),
            )
            .await;
        }

        let (status, body) = call(&app, "GET", "/wishlists?id=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "b");

        let (_, body) = call(&app, "GET", "/wishlists?customer_id=1", None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        let (_, body) = call(&app, "GET", "/wishlists?id=3&customer_id=2", None).await;
        assert_eq!(body, json!([{"id": 3, "name": "c", "customer_id": 2}]));

        let (status, body) = call(&app, "GET", "/wishlists?name=zzz", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Wishlist was not found.");
    }

    #[tokio::test]
    async fn rename_unknown_wishlist_is_404() {
        let app = router(AppState::default(), None);
        let (status, body) = call(&app, "PUT", "/wishlists/9", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Wishlist with id '9' was not found.");
    }

    #[tokio::test]
    async fn delete_is_204_even_when_absent() {
        let app = router(AppState::default(), None);
        let (status, body) = call(&app, "DELETE", "/wishlists/5", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());
    }
}
