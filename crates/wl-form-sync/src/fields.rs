//! Named page elements the console reads from and writes to.
//!
//! Each identifier maps to a fixed DOM id. The page markup owns the
//! elements; this module only names them.

/// Editable input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Primary wishlist id field, blanked by the wishlist clear button.
    WishlistId,

    WishlistIdUpdate,
    WishlistNameUpdate,
    WishlistNameCreate,
    CustomerIdCreate,
    WishlistIdDelete,
    WishlistNameSearch,
    CustomerIdSearch,
    WishlistIdSearch,

    ItemWishlistIdCreate,
    ItemProductIdCreate,
    ItemProductNameCreate,
    ItemWishlistIdUpdate,
    ItemProductIdUpdate,
    ItemProductNameUpdate,
    ItemWishlistIdDelete,
    ItemProductIdDelete,
    ItemWishlistIdSearch,
    ItemProductIdSearch,
    ItemProductNameSearch,

    CartWishlistId,
    CartProductId,
}

impl FieldId {
    pub const ALL: [FieldId; 22] = [
        FieldId::WishlistId,
        FieldId::WishlistIdUpdate,
        FieldId::WishlistNameUpdate,
        FieldId::WishlistNameCreate,
        FieldId::CustomerIdCreate,
        FieldId::WishlistIdDelete,
        FieldId::WishlistNameSearch,
        FieldId::CustomerIdSearch,
        FieldId::WishlistIdSearch,
        FieldId::ItemWishlistIdCreate,
        FieldId::ItemProductIdCreate,
        FieldId::ItemProductNameCreate,
        FieldId::ItemWishlistIdUpdate,
        FieldId::ItemProductIdUpdate,
        FieldId::ItemProductNameUpdate,
        FieldId::ItemWishlistIdDelete,
        FieldId::ItemProductIdDelete,
        FieldId::ItemWishlistIdSearch,
        FieldId::ItemProductIdSearch,
        FieldId::ItemProductNameSearch,
        FieldId::CartWishlistId,
        FieldId::CartProductId,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::WishlistId => "wishlist_id",
            FieldId::WishlistIdUpdate => "wishlist_id_u",
            FieldId::WishlistNameUpdate => "wishlist_name_u",
            FieldId::WishlistNameCreate => "wishlist_name_c",
            FieldId::CustomerIdCreate => "customer_id_c",
            FieldId::WishlistIdDelete => "wishlist_id_d",
            FieldId::WishlistNameSearch => "wishlist_name_s",
            FieldId::CustomerIdSearch => "customer_id_s",
            FieldId::WishlistIdSearch => "wishlist_id_s",
            FieldId::ItemWishlistIdCreate => "wishlist_id_cp",
            FieldId::ItemProductIdCreate => "product_id_cp",
            FieldId::ItemProductNameCreate => "product_name_cp",
            FieldId::ItemWishlistIdUpdate => "wishlist_id_up",
            FieldId::ItemProductIdUpdate => "product_id_up",
            FieldId::ItemProductNameUpdate => "product_name_up",
            FieldId::ItemWishlistIdDelete => "wishlist_id_dp",
            FieldId::ItemProductIdDelete => "product_id_dp",
            FieldId::ItemWishlistIdSearch => "wishlist_id_sp",
            FieldId::ItemProductIdSearch => "product_id_sp",
            FieldId::ItemProductNameSearch => "product_name_sp",
            FieldId::CartWishlistId => "wishlist_id_action",
            FieldId::CartProductId => "product_id_action",
        }
    }
}

/// A set of forms that are reset together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Wishlist,
    Item,
}

impl FieldGroup {
    /// Fields blanked by this group's reset.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FieldGroup::Wishlist => &[
                FieldId::WishlistIdUpdate,
                FieldId::WishlistNameUpdate,
                FieldId::WishlistNameCreate,
                FieldId::CustomerIdCreate,
                FieldId::WishlistIdDelete,
                FieldId::WishlistNameSearch,
                FieldId::CustomerIdSearch,
                FieldId::WishlistIdSearch,
            ],
            FieldGroup::Item => &[
                FieldId::ItemWishlistIdCreate,
                FieldId::ItemProductIdCreate,
                FieldId::ItemProductNameCreate,
                FieldId::ItemWishlistIdUpdate,
                FieldId::ItemProductIdUpdate,
                FieldId::ItemProductNameUpdate,
                FieldId::ItemWishlistIdDelete,
                FieldId::ItemProductIdDelete,
                FieldId::ItemWishlistIdSearch,
                FieldId::ItemProductIdSearch,
                FieldId::ItemProductNameSearch,
            ],
        }
    }
}

/// Read-only element showing the id of the last created or updated entity.
pub const ID_DISPLAY: &str = "wishlist_id_c";

/// Single-slot status message area.
pub const FLASH_AREA: &str = "flash_message";

/// Containers that hold rendered search tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultArea {
    Wishlists,
    Items,
}

impl ResultArea {
    pub fn dom_id(self) -> &'static str {
        match self {
            ResultArea::Wishlists => "search_results",
            ResultArea::Items => "search_results-p",
        }
    }
}
