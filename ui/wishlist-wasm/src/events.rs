//! Event binding.
//!
//! Every console button maps to one `Action`. Clicks spawn the action via
//! `wasm_bindgen_futures::spawn_local`; a second click before the first
//! resolves starts an independent request.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wl_form_sync::{Action, FormSync, Transport};

use crate::dom::Elements;

/// Helper: attach async click handler running `action` on the shared console.
macro_rules! on_click_async {
    ($el:expr, $sync:expr, $action:expr) => {{
        let sync = Rc::clone($sync);
        let action: Action = $action;
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let sync2 = Rc::clone(&sync);
            wasm_bindgen_futures::spawn_local(async move {
                sync2.perform(action).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all button listeners. Call once after init.
pub fn bind_events<T>(els: &Elements, sync: &Rc<FormSync<T, Elements>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
{
    for (button, action) in &els.buttons {
        on_click_async!(button, sync, *action);
    }
    Ok(())
}
