//! DOM element bindings.
//!
//! All elements are resolved once at startup. `Elements` is the browser
//! implementation of `FormSurface`.

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};
use wl_form_sync::fields::{FLASH_AREA, ID_DISPLAY};
use wl_form_sync::{Action, BUTTONS, FieldId, FormSurface, ResultArea};

// ── Helpers ──

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn doc() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().ok()?.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

// ── Elements struct ──

/// Every element the console touches.
/// Clone-friendly (inner handles are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub inputs: Rc<HashMap<FieldId, HtmlInputElement>>,
    pub id_display: Element,
    pub flash: Element,
    pub wishlist_results: Element,
    pub item_results: Element,
    pub buttons: Vec<(HtmlElement, Action)>,
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let mut inputs = HashMap::new();
        for field in FieldId::ALL {
            inputs.insert(field, get_input!(field.dom_id()));
        }

        let mut buttons = Vec::with_capacity(BUTTONS.len());
        for (id, action) in BUTTONS {
            buttons.push((get_html!(id), action));
        }

        Ok(Elements {
            inputs: Rc::new(inputs),
            id_display: get_el!(ID_DISPLAY),
            flash: get_el!(FLASH_AREA),
            wishlist_results: get_el!(ResultArea::Wishlists.dom_id()),
            item_results: get_el!(ResultArea::Items.dom_id()),
            buttons,
        })
    }

    fn area(&self, area: ResultArea) -> &Element {
        match area {
            ResultArea::Wishlists => &self.wishlist_results,
            ResultArea::Items => &self.item_results,
        }
    }
}

impl FormSurface for Elements {
    fn field_value(&self, field: FieldId) -> String {
        self.inputs
            .get(&field)
            .map(get_input_value)
            .unwrap_or_default()
    }

    fn set_field_value(&self, field: FieldId, value: &str) {
        if let Some(input) = self.inputs.get(&field) {
            input.set_value(value);
        }
    }

    fn set_id_display(&self, text: &str) {
        self.id_display.set_text_content(Some(text));
    }

    fn area_html(&self, area: ResultArea) -> String {
        self.area(area).inner_html()
    }

    fn set_area_html(&self, area: ResultArea, html: &str) {
        self.area(area).set_inner_html(html);
    }

    fn flash(&self, message: &str) {
        self.flash.set_text_content(Some(message));
    }
}
