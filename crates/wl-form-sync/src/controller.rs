//! FormSync: one routine for every console action.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use wl_api_types::{Wishlist, WishlistItem};

use crate::fields::{FieldGroup, FieldId, ResultArea};
use crate::ops::{Operation, SuccessKind};
use crate::query::QueryEncoding;
use crate::render::{ResultTable, as_list};
use crate::surface::FormSurface;
use crate::transport::{DispatchError, Transport, dispatch};

pub const SUCCESS: &str = "Success";
pub const WISHLIST_DELETED: &str = "Wishlist has been Deleted!";
pub const ITEM_DELETED: &str = "Wishlist item has been Deleted!";

/// Result-area markup captured once at startup and restored on clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshots {
    pub wishlists: String,
    pub items: String,
}

impl Snapshots {
    pub fn capture<S: FormSurface + ?Sized>(surface: &S) -> Self {
        Self {
            wishlists: surface.area_html(ResultArea::Wishlists),
            items: surface.area_html(ResultArea::Items),
        }
    }

    pub fn get(&self, area: ResultArea) -> &str {
        match area {
            ResultArea::Wishlists => &self.wishlists,
            ResultArea::Items => &self.items,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    pub query_encoding: QueryEncoding,
    pub snapshots: Snapshots,
}

/// What a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run(Operation),
    ClearWishlists,
    ClearItems,
}

/// Button DOM ids and their actions.
pub const BUTTONS: [(&str, Action); 11] = [
    ("create-btn", Action::Run(Operation::CreateWishlist)),
    ("update-btn", Action::Run(Operation::UpdateWishlist)),
    ("delete-btn", Action::Run(Operation::DeleteWishlist)),
    ("search-btn", Action::Run(Operation::SearchWishlists)),
    ("clear-btn", Action::ClearWishlists),
    ("create-btn-p", Action::Run(Operation::CreateItem)),
    ("update-btn-p", Action::Run(Operation::UpdateItem)),
    ("delete-btn-p", Action::Run(Operation::DeleteItem)),
    ("search-btn-p", Action::Run(Operation::SearchItems)),
    ("clear-btn-p", Action::ClearItems),
    ("create-btn-action", Action::Run(Operation::MoveToCart)),
];

pub struct FormSync<T, S> {
    transport: T,
    surface: S,
    config: ConsoleConfig,
}

impl<T, S> FormSync<T, S>
where
    T: Transport,
    S: FormSurface,
{
    pub fn new(transport: T, surface: S, config: ConsoleConfig) -> Self {
        Self {
            transport,
            surface,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub async fn perform(&self, action: Action) {
        match action {
            Action::Run(op) => {
                // Already reported in the flash area.
                let _ = self.run(op).await;
            }
            Action::ClearWishlists => self.clear_wishlists(),
            Action::ClearItems => self.reset(FieldGroup::Item),
        }
    }

    /// Issue the operation's request and apply its result to the page.
    ///
    /// Every error is also written to the flash area.
    pub async fn run(&self, op: Operation) -> Result<(), DispatchError> {
        let endpoint = op.endpoint();
        let request = endpoint.build_request(
            |field| self.surface.field_value(field),
            self.config.query_encoding,
        );

        let outcome = match dispatch(&self.transport, &request).await {
            Ok(body) => self.apply(endpoint.on_success, body),
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            self.surface.flash(err.flash_text());
        }
        outcome
    }

    fn apply(&self, kind: SuccessKind, body: Value) -> Result<(), DispatchError> {
        match kind {
            SuccessKind::EchoId => {
                self.echo_id(&body);
                self.surface.flash(SUCCESS);
            }
            SuccessKind::Clear(group) => {
                self.reset(group);
                self.surface.flash(match group {
                    FieldGroup::Wishlist => WISHLIST_DELETED,
                    FieldGroup::Item => ITEM_DELETED,
                });
            }
            SuccessKind::RenderList(area) => {
                self.render_list(area, body)?;
                self.surface.flash(SUCCESS);
            }
        }
        Ok(())
    }

    fn echo_id(&self, body: &Value) {
        let id = match body.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        self.surface.set_id_display(&id);
    }

    fn render_list(&self, area: ResultArea, body: Value) -> Result<(), DispatchError> {
        let rows = as_list(body);
        let table = match area {
            ResultArea::Wishlists => ResultTable::wishlists(&decode_all::<Wishlist>(rows)?),
            ResultArea::Items => {
                let items = decode_all::<WishlistItem>(rows)?;
                if let Some(first) = items.first() {
                    self.prefill_item(first);
                }
                ResultTable::items(&items)
            }
        };
        debug!("rendering {} rows into #{}", table.rows.len(), area.dom_id());
        self.surface.set_area_html(area, &table.to_html());
        Ok(())
    }

    fn prefill_item(&self, item: &WishlistItem) {
        let wishlist_id = item.wishlist_id.to_string();
        let product_id = item.product_id.to_string();
        self.surface
            .set_field_value(FieldId::ItemWishlistIdUpdate, &wishlist_id);
        self.surface
            .set_field_value(FieldId::ItemProductIdUpdate, &product_id);
        self.surface
            .set_field_value(FieldId::ItemProductNameUpdate, &item.product_name);
        self.surface
            .set_field_value(FieldId::ItemWishlistIdDelete, &wishlist_id);
        self.surface
            .set_field_value(FieldId::ItemProductIdDelete, &product_id);
        if let Some(id) = item.id {
            self.surface.set_id_display(&id.to_string());
        }
    }

    /// Blank a group's fields. The wishlist group also clears the id display;
    /// the item group restores its result area.
    pub fn reset(&self, group: FieldGroup) {
        for field in group.fields() {
            self.surface.set_field_value(*field, "");
        }
        match group {
            FieldGroup::Wishlist => self.surface.set_id_display(""),
            FieldGroup::Item => self.restore(ResultArea::Items),
        }
    }

    pub fn clear_wishlists(&self) {
        info!("clearing wishlist forms");
        self.surface.set_field_value(FieldId::WishlistId, "");
        self.reset(FieldGroup::Wishlist);
        self.restore(ResultArea::Wishlists);
    }

    fn restore(&self, area: ResultArea) {
        self.surface
            .set_area_html(area, self.config.snapshots.get(area));
    }
}

fn decode_all<D: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<D>, DispatchError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| DispatchError::Decode(e.to_string())))
        .collect()
}
