use std::collections::BTreeMap;
use wl_api_types::{Wishlist, WishlistItem};

/// In-memory wishlists and items. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct Store {
    last_wishlist_id: i64,
    last_item_id: i64,
    wishlists: BTreeMap<i64, Wishlist>,
    items: BTreeMap<i64, WishlistItem>,
}

impl Store {
    pub fn create_wishlist(&mut self, name: String, customer_id: i64) -> Wishlist {
        self.last_wishlist_id += 1;
        let wishlist = Wishlist {
            id: self.last_wishlist_id,
            name,
            customer_id,
        };
        self.wishlists.insert(wishlist.id, wishlist.clone());
        wishlist
    }

    pub fn wishlist(&self, id: i64) -> Option<&Wishlist> {
        self.wishlists.get(&id)
    }

    pub fn wishlist_mut(&mut self, id: i64) -> Option<&mut Wishlist> {
        self.wishlists.get_mut(&id)
    }

    pub fn wishlists(&self) -> impl Iterator<Item = &Wishlist> {
        self.wishlists.values()
    }

    /// Remove a wishlist and every item in it.
    pub fn delete_wishlist(&mut self, id: i64) -> Option<Wishlist> {
        let removed = self.wishlists.remove(&id)?;
        self.items.retain(|_, item| item.wishlist_id != id);
        Some(removed)
    }

    pub fn add_item(
        &mut self,
        wishlist_id: i64,
        product_id: i64,
        product_name: String,
    ) -> WishlistItem {
        self.last_item_id += 1;
        let item = WishlistItem {
            id: Some(self.last_item_id),
            wishlist_id,
            product_id,
            product_name,
        };
        self.items.insert(self.last_item_id, item.clone());
        item
    }

    fn item_key(&self, wishlist_id: i64, product_id: i64) -> Option<i64> {
        self.items
            .iter()
            .find(|(_, item)| item.wishlist_id == wishlist_id && item.product_id == product_id)
            .map(|(key, _)| *key)
    }

    pub fn item(&self, wishlist_id: i64, product_id: i64) -> Option<&WishlistItem> {
        let key = self.item_key(wishlist_id, product_id)?;
        self.items.get(&key)
    }

    pub fn item_mut(&mut self, wishlist_id: i64, product_id: i64) -> Option<&mut WishlistItem> {
        let key = self.item_key(wishlist_id, product_id)?;
        self.items.get_mut(&key)
    }

    pub fn items(&self, wishlist_id: i64) -> impl Iterator<Item = &WishlistItem> {
        self.items
            .values()
            .filter(move |item| item.wishlist_id == wishlist_id)
    }

    pub fn remove_item(&mut self, wishlist_id: i64, product_id: i64) -> Option<WishlistItem> {
        let key = self.item_key(wishlist_id, product_id)?;
        self.items.remove(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut store = Store::default();
        let a = store.create_wishlist("a".into(), 1);
        let b = store.create_wishlist("b".into(), 1);
        assert_eq!((a.id, b.id), (1, 2));
        store.delete_wishlist(b.id);
        assert_eq!(store.create_wishlist("c".into(), 1).id, 3);
    }

    #[test]
    fn deleting_a_wishlist_drops_its_items() {
        let mut store = Store::default();
        let keep = store.create_wishlist("keep".into(), 1);
        let drop = store.create_wishlist("drop".into(), 1);
        store.add_item(keep.id, 10, "pen".into());
        store.add_item(drop.id, 11, "ink".into());

        store.delete_wishlist(drop.id);

        assert_eq!(store.items(keep.id).count(), 1);
        assert_eq!(store.items(drop.id).count(), 0);
    }

    #[test]
    fn items_are_addressed_by_wishlist_and_product() {
        let mut store = Store::default();
        let w = store.create_wishlist("w".into(), 1);
        store.add_item(w.id, 10, "pen".into());
        assert!(store.item(w.id, 10).is_some());
        assert!(store.item(w.id + 1, 10).is_none());
        assert_eq!(store.remove_item(w.id, 10).map(|i| i.product_name), Some("pen".into()));
        assert!(store.item(w.id, 10).is_none());
    }
}
