//! Declarative operation table.
//!
//! Every console button that talks to the API is one `Operation`. Its
//! `Endpoint` says which fields feed the path, body and query string,
//! and which handler consumes the response.

use serde_json::{Map, Value};

use crate::fields::{FieldGroup, FieldId, ResultArea};
use crate::query::{QueryEncoding, build_query, encode_component};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PathPart {
    Lit(&'static str),
    Field(FieldId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Integer-only: blank input is 0, an integer is itself, anything else is `null`.
    Number,
}

#[derive(Debug, Clone, Copy)]
pub struct BodyField {
    pub key: &'static str,
    pub field: FieldId,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryField {
    pub param: &'static str,
    pub field: FieldId,
}

/// What to do with a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessKind {
    EchoId,
    Clear(FieldGroup),
    RenderList(ResultArea),
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static [PathPart],
    pub body: Option<&'static [BodyField]>,
    pub query: &'static [QueryField],
    pub on_success: SuccessKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateWishlist,
    UpdateWishlist,
    DeleteWishlist,
    SearchWishlists,
    CreateItem,
    UpdateItem,
    DeleteItem,
    SearchItems,
    MoveToCart,
}

use PathPart::{Field, Lit};

const fn text(key: &'static str, field: FieldId) -> BodyField {
    BodyField {
        key,
        field,
        kind: FieldKind::Text,
    }
}

const fn number(key: &'static str, field: FieldId) -> BodyField {
    BodyField {
        key,
        field,
        kind: FieldKind::Number,
    }
}

const fn param(param: &'static str, field: FieldId) -> QueryField {
    QueryField { param, field }
}

const CREATE_WISHLIST_BODY: &[BodyField] = &[
    text("name", FieldId::WishlistNameCreate),
    number("customer_id", FieldId::CustomerIdCreate),
];
const UPDATE_WISHLIST_BODY: &[BodyField] = &[text("name", FieldId::WishlistNameUpdate)];
const CREATE_ITEM_BODY: &[BodyField] = &[
    number("product_id", FieldId::ItemProductIdCreate),
    text("product_name", FieldId::ItemProductNameCreate),
];
const UPDATE_ITEM_BODY: &[BodyField] = &[text("product_name", FieldId::ItemProductNameUpdate)];

// Search filters, in the order they appear in the query string.
const WISHLIST_SEARCH_QUERY: &[QueryField] = &[
    param("id", FieldId::WishlistIdSearch),
    param("name", FieldId::WishlistNameSearch),
    param("customer_id", FieldId::CustomerIdSearch),
];
const ITEM_SEARCH_QUERY: &[QueryField] = &[
    param("wishlist_id", FieldId::ItemWishlistIdSearch),
    param("product_name", FieldId::ItemProductNameSearch),
    param("product_id", FieldId::ItemProductIdSearch),
];

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::CreateWishlist,
        Operation::UpdateWishlist,
        Operation::DeleteWishlist,
        Operation::SearchWishlists,
        Operation::CreateItem,
        Operation::UpdateItem,
        Operation::DeleteItem,
        Operation::SearchItems,
        Operation::MoveToCart,
    ];

    pub fn endpoint(self) -> Endpoint {
        match self {
            Operation::CreateWishlist => Endpoint {
                method: Method::Post,
                path: &[Lit("/wishlists")],
                body: Some(CREATE_WISHLIST_BODY),
                query: &[],
                on_success: SuccessKind::EchoId,
            },
            Operation::UpdateWishlist => Endpoint {
                method: Method::Put,
                path: &[Lit("/wishlists/"), Field(FieldId::WishlistIdUpdate)],
                body: Some(UPDATE_WISHLIST_BODY),
                query: &[],
                on_success: SuccessKind::EchoId,
            },
            Operation::DeleteWishlist => Endpoint {
                method: Method::Delete,
                path: &[Lit("/wishlists/"), Field(FieldId::WishlistIdDelete)],
                body: None,
                query: &[],
                on_success: SuccessKind::Clear(FieldGroup::Wishlist),
            },
            Operation::SearchWishlists => Endpoint {
                method: Method::Get,
                path: &[Lit("/wishlists")],
                body: None,
                query: WISHLIST_SEARCH_QUERY,
                on_success: SuccessKind::RenderList(ResultArea::Wishlists),
            },
            Operation::CreateItem => Endpoint {
                method: Method::Post,
                path: &[
                    Lit("/wishlists/"),
                    Field(FieldId::ItemWishlistIdCreate),
                    Lit("/items"),
                ],
                body: Some(CREATE_ITEM_BODY),
                query: &[],
                on_success: SuccessKind::EchoId,
            },
            Operation::UpdateItem => Endpoint {
                method: Method::Put,
                path: &[
                    Lit("/wishlists/"),
                    Field(FieldId::ItemWishlistIdUpdate),
                    Lit("/items/"),
                    Field(FieldId::ItemProductIdUpdate),
                ],
                body: Some(UPDATE_ITEM_BODY),
                query: &[],
                on_success: SuccessKind::EchoId,
            },
            Operation::DeleteItem => Endpoint {
                method: Method::Delete,
                path: &[
                    Lit("/wishlists/"),
                    Field(FieldId::ItemWishlistIdDelete),
                    Lit("/items/"),
                    Field(FieldId::ItemProductIdDelete),
                ],
                body: None,
                query: &[],
                on_success: SuccessKind::Clear(FieldGroup::Item),
            },
            Operation::SearchItems => Endpoint {
                method: Method::Get,
                path: &[
                    Lit("/wishlists/"),
                    Field(FieldId::ItemWishlistIdSearch),
                    Lit("/items"),
                ],
                body: None,
                query: ITEM_SEARCH_QUERY,
                on_success: SuccessKind::RenderList(ResultArea::Items),
            },
            Operation::MoveToCart => Endpoint {
                method: Method::Put,
                path: &[
                    Lit("/wishlists/"),
                    Field(FieldId::CartWishlistId),
                    Lit("/items/"),
                    Field(FieldId::CartProductId),
                    Lit("/add-to-cart"),
                ],
                body: None,
                query: &[],
                on_success: SuccessKind::EchoId,
            },
        }
    }
}

/// One HTTP request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Endpoint {
    /// Build the request from current field values.
    pub fn build_request<F>(&self, read: F, encoding: QueryEncoding) -> ApiRequest
    where
        F: Fn(FieldId) -> String,
    {
        let mut path = String::new();
        for part in self.path {
            match part {
                Lit(s) => path.push_str(s),
                Field(field) => path.push_str(&encode_component(read(*field).trim())),
            }
        }

        let values: Vec<(&str, String)> = self
            .query
            .iter()
            .map(|q| (q.param, read(q.field)))
            .collect();
        path.push_str(&build_query(
            values.iter().map(|(name, value)| (*name, value.as_str())),
            encoding,
        ));

        let body = self.body.map(|fields| {
            let mut object = Map::new();
            for f in fields {
                let raw = read(f.field);
                let value = match f.kind {
                    FieldKind::Text => Value::String(raw),
                    FieldKind::Number => number_value(&raw),
                };
                object.insert(f.key.to_owned(), value);
            }
            Value::Object(object)
        });

        ApiRequest {
            method: self.method,
            path,
            body,
        }
    }
}

/// Blank input is 0, an integer is itself, anything else is `null`.
pub fn number_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::from(0);
    }
    match trimmed.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn reader(values: &[(FieldId, &str)]) -> impl Fn(FieldId) -> String {
        let map: HashMap<FieldId, String> =
            values.iter().map(|(f, v)| (*f, (*v).to_owned())).collect();
        move |f| map.get(&f).cloned().unwrap_or_default()
    }

    #[test]
    fn create_wishlist_posts_name_and_numeric_customer() {
        let read = reader(&[
            (FieldId::WishlistNameCreate, "Books"),
            (FieldId::CustomerIdCreate, "7"),
        ]);
        let req = Operation::CreateWishlist
            .endpoint()
            .build_request(read, QueryEncoding::Percent);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/wishlists");
        assert_eq!(req.body, Some(json!({"name": "Books", "customer_id": 7})));
    }

    #[test]
    fn item_paths_fill_templates() {
        let read = reader(&[
            (FieldId::ItemWishlistIdUpdate, "3"),
            (FieldId::ItemProductIdUpdate, "11"),
            (FieldId::ItemProductNameUpdate, "Pen"),
            (FieldId::ItemWishlistIdDelete, "3"),
            (FieldId::ItemProductIdDelete, "12"),
            (FieldId::CartWishlistId, "4"),
            (FieldId::CartProductId, "5"),
        ]);

        let update = Operation::UpdateItem
            .endpoint()
            .build_request(&read, QueryEncoding::Percent);
        assert_eq!(update.method, Method::Put);
        assert_eq!(update.path, "/wishlists/3/items/11");
        assert_eq!(update.body, Some(json!({"product_name": "Pen"})));

        let delete = Operation::DeleteItem
            .endpoint()
            .build_request(&read, QueryEncoding::Percent);
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.path, "/wishlists/3/items/12");
        assert_eq!(delete.body, None);

        let cart = Operation::MoveToCart
            .endpoint()
            .build_request(&read, QueryEncoding::Percent);
        assert_eq!(cart.method, Method::Put);
        assert_eq!(cart.path, "/wishlists/4/items/5/add-to-cart");
        assert_eq!(cart.body, None);
    }

    #[test]
    fn item_search_repeats_wishlist_id_in_query() {
        let read = reader(&[
            (FieldId::ItemWishlistIdSearch, "2"),
            (FieldId::ItemProductIdSearch, "9"),
        ]);
        let req = Operation::SearchItems
            .endpoint()
            .build_request(read, QueryEncoding::Percent);
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/wishlists/2/items?wishlist_id=2&product_id=9");
    }

    #[test]
    fn wishlist_search_without_filters_lists_all() {
        let req = Operation::SearchWishlists
            .endpoint()
            .build_request(reader(&[]), QueryEncoding::Percent);
        assert_eq!(req.path, "/wishlists");
        assert_eq!(req.body, None);
    }

    #[test]
    fn path_segments_are_encoded() {
        let read = reader(&[(FieldId::WishlistIdDelete, "1/2")]);
        let req = Operation::DeleteWishlist
            .endpoint()
            .build_request(read, QueryEncoding::Verbatim);
        assert_eq!(req.path, "/wishlists/1%2F2");
    }

    #[test]
    fn number_value_accepts_integers_only() {
        assert_eq!(number_value(""), json!(0));
        assert_eq!(number_value(" 42 "), json!(42));
        assert_eq!(number_value("-3"), json!(-3));
        assert_eq!(number_value("abc"), Value::Null);
        assert_eq!(number_value("1.5"), Value::Null);
        assert_eq!(number_value("1e2"), Value::Null);
    }
}
