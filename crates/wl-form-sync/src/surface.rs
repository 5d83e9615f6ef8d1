//! The page the controller drives.
//!
//! In the browser this is the DOM. `MemorySurface` keeps the same state in
//! plain maps so the controller can run headless.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::fields::{FieldId, ResultArea};

/// Read and write access to form fields, the id display, result areas and
/// the flash area. Methods take `&self`; implementations use interior
/// mutability the way the DOM does.
pub trait FormSurface {
    fn field_value(&self, field: FieldId) -> String;
    fn set_field_value(&self, field: FieldId, value: &str);
    fn set_id_display(&self, text: &str);
    fn area_html(&self, area: ResultArea) -> String;
    fn set_area_html(&self, area: ResultArea, html: &str);
    /// Replace the flash message.
    fn flash(&self, message: &str);
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    fields: RefCell<HashMap<FieldId, String>>,
    id_display: RefCell<String>,
    areas: RefCell<HashMap<ResultArea, String>>,
    flash: RefCell<String>,
}

impl MemorySurface {
    /// A surface whose result areas start with the given markup.
    pub fn with_areas(wishlists: &str, items: &str) -> Self {
        let surface = Self::default();
        surface.set_area_html(ResultArea::Wishlists, wishlists);
        surface.set_area_html(ResultArea::Items, items);
        surface
    }

    pub fn id_display(&self) -> String {
        self.id_display.borrow().clone()
    }

    pub fn flash_message(&self) -> String {
        self.flash.borrow().clone()
    }
}

impl FormSurface for MemorySurface {
    fn field_value(&self, field: FieldId) -> String {
        self.fields
            .borrow()
            .get(&field)
            .map(|v| v.trim().to_owned())
            .unwrap_or_default()
    }

    fn set_field_value(&self, field: FieldId, value: &str) {
        self.fields.borrow_mut().insert(field, value.to_owned());
    }

    fn set_id_display(&self, text: &str) {
        *self.id_display.borrow_mut() = text.to_owned();
    }

    fn area_html(&self, area: ResultArea) -> String {
        self.areas.borrow().get(&area).cloned().unwrap_or_default()
    }

    fn set_area_html(&self, area: ResultArea, html: &str) {
        self.areas.borrow_mut().insert(area, html.to_owned());
    }

    fn flash(&self, message: &str) {
        *self.flash.borrow_mut() = message.to_owned();
    }
}
