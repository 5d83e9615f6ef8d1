//! Wishlist admin console, browser frontend.
//!
//! Binds the page's form fields and buttons to the `wl-form-sync` controller.
//! `dom` resolves elements, `api` talks to the service over `fetch`,
//! `events` wires the buttons.

pub mod api;
pub mod dom;
pub mod events;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wl_form_sync::{ConsoleConfig, FormSync, Snapshots};

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().inspect_err(|err| {
        gloo_console::error!("wishlist console failed to start:", err.clone());
    })
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Result areas hold their empty-state markup only until the first search.
    let config = ConsoleConfig {
        snapshots: Snapshots::capture(&els),
        ..ConsoleConfig::default()
    };
    let sync = Rc::new(FormSync::new(api::FetchTransport, els.clone(), config));

    events::bind_events(&els, &sync)?;

    gloo_console::log!("wishlist console ready, api base:", api::base_url());
    Ok(())
}
