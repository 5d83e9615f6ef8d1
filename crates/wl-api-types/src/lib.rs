use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    pub id: i64,
    pub name: String,
    pub customer_id: i64,
}

/// A product held in a wishlist. Identity is `(wishlist_id, product_id)`;
/// `id` is the server's surrogate key and is not always returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub wishlist_id: i64,
    pub product_id: i64,
    pub product_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWishlistRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameWishlistRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameItemRequest {
    #[serde(default)]
    pub product_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub customer_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistItemQuery {
    pub wishlist_id: Option<i64>,
    pub product_name: Option<String>,
    pub product_id: Option<i64>,
}

/// Error body returned by the wishlist service. Clients only rely on `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}
