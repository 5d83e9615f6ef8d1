//! HTTP transport over `fetch`.
//!
//! `base_url()` reads the optional `#baseUrl` input; without it requests go
//! to the page's own origin.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};
use wl_form_sync::{ApiRequest, ApiResponse, Transport, TransportError};

use crate::dom;

/// Determine the API base URL.
///
/// Priority: user-supplied `#baseUrl` input → same origin (relative paths).
pub fn base_url() -> String {
    dom::by_id_typed::<web_sys::HtmlInputElement>("baseUrl")
        .map(|input| dom::get_input_value(&input))
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

pub struct FetchTransport;

fn js_err(context: &str, err: JsValue) -> TransportError {
    TransportError(format!("{context}: {err:?}"))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", base_url(), request.path);

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(|e| js_err("headers", e))?;
        if let Some(body) = &request.body {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| js_err("headers", e))?;
            opts.set_body(&JsValue::from_str(&body.to_string()));
        }
        opts.set_headers(&headers);

        let req = Request::new_with_str_and_init(&url, &opts).map_err(|e| js_err("request", e))?;

        let window = dom::window().map_err(|e| js_err("window", e))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| js_err("fetch error", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| TransportError("response is not a Response".to_string()))?;

        let text = JsFuture::from(resp.text().map_err(|e| js_err("text", e))?)
            .await
            .map_err(|e| js_err("text error", e))?;

        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
