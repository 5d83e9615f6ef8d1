//! Search result tables.

use serde_json::Value;
use wl_api_types::{Wishlist, WishlistItem};

/// A rendered search result: fixed header labels plus one row per entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: [&'static str; 3],
    pub rows: Vec<[String; 3]>,
}

const WISHLIST_HEADERS: [&str; 3] = ["Wishlist ID", "Wishlist Name", "Customer ID"];
const ITEM_HEADERS: [&str; 3] = ["Wishlist ID", "Product ID", "Product Name"];
const COLUMN_WIDTHS: [&str; 3] = ["10%", "40%", "40%"];

impl ResultTable {
    pub fn wishlists(wishlists: &[Wishlist]) -> Self {
        Self {
            headers: WISHLIST_HEADERS,
            rows: wishlists
                .iter()
                .map(|w| [w.id.to_string(), w.name.clone(), w.customer_id.to_string()])
                .collect(),
        }
    }

    pub fn items(items: &[WishlistItem]) -> Self {
        Self {
            headers: ITEM_HEADERS,
            rows: items
                .iter()
                .map(|i| {
                    [
                        i.wishlist_id.to_string(),
                        i.product_id.to_string(),
                        i.product_name.clone(),
                    ]
                })
                .collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table-striped" cellpadding="10">"#);
        html.push_str("<tr>");
        for (label, width) in self.headers.iter().zip(COLUMN_WIDTHS) {
            html.push_str(&format!(r#"<th style="width:{width}">{label}</th>"#));
        }
        html.push_str("</tr>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html_escape_into(&mut html, cell);
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }
}

/// Normalize a search response into a list.
///
/// A single object counts as a one-element list; `null` as an empty one.
pub fn as_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(values) => values,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn html_escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wishlist(id: i64, name: &str, customer_id: i64) -> Wishlist {
        Wishlist {
            id,
            name: name.to_owned(),
            customer_id,
        }
    }

    #[test]
    fn three_wishlists_give_header_and_three_rows() {
        let table = ResultTable::wishlists(&[
            wishlist(1, "Books", 7),
            wishlist(2, "Games", 7),
            wishlist(3, "Tools", 8),
        ]);
        let html = table.to_html();
        assert_eq!(html.matches("<tr>").count(), 4);
        assert_eq!(html.matches("<th ").count(), 3);
        assert!(html.contains("<tr><td>2</td><td>Games</td><td>7</td></tr>"));
        let id_at = html.find("Wishlist ID").unwrap_or(usize::MAX);
        let name_at = html.find("Wishlist Name").unwrap_or(0);
        let customer_at = html.find("Customer ID").unwrap_or(0);
        assert!(id_at < name_at && name_at < customer_at);
    }

    #[test]
    fn rows_keep_server_order() {
        let table = ResultTable::wishlists(&[wishlist(9, "z", 1), wishlist(2, "a", 1)]);
        assert_eq!(table.rows[0][0], "9");
        assert_eq!(table.rows[1][0], "2");
    }

    #[test]
    fn empty_list_is_header_only() {
        let html = ResultTable::items(&[]).to_html();
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("Product Name"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn item_columns_in_fixed_order() {
        let table = ResultTable::items(&[WishlistItem {
            id: Some(5),
            wishlist_id: 1,
            product_id: 30,
            product_name: "Lamp".to_owned(),
        }]);
        assert_eq!(table.rows, vec![["1".to_owned(), "30".to_owned(), "Lamp".to_owned()]]);
    }

    #[test]
    fn cell_text_is_escaped() {
        let html = ResultTable::wishlists(&[wishlist(1, "<b>&\"x\"</b>", 2)]).to_html();
        assert!(html.contains("<td>&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;</td>"));
    }

    #[test]
    fn as_list_accepts_object_array_and_null() {
        assert_eq!(as_list(json!([1, 2])).len(), 2);
        assert_eq!(as_list(json!({"id": 1})).len(), 1);
        assert!(as_list(Value::Null).is_empty());
    }
}
