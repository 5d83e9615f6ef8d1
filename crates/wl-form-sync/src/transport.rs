//! HTTP seam and request dispatch.
//!
//! A `Transport` performs exactly one request and reports the raw status and
//! body. `dispatch` turns that into `Ok(json)` for 2xx and a `DispatchError`
//! otherwise. There is no retry, timeout or cancellation.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ops::ApiRequest;

/// Shown when the server gives no usable message.
pub const GENERIC_ERROR: &str = "Server error!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR))]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl DispatchError {
    /// The one-line text for the flash area.
    pub fn flash_text(&self) -> &str {
        match self {
            DispatchError::Status {
                message: Some(message),
                ..
            } => message,
            _ => GENERIC_ERROR,
        }
    }
}

/// The `message` field of an error body, whatever the other fields hold.
fn error_message(body: &str) -> Option<String> {
    let body: Value = serde_json::from_str(body).ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

/// Send one request and classify the outcome.
///
/// An empty 2xx body (for example a 204 from delete) decodes to `null`.
pub async fn dispatch<T>(transport: &T, request: &ApiRequest) -> Result<Value, DispatchError>
where
    T: Transport + ?Sized,
{
    debug!("{} {}", request.method.as_str(), request.path);

    let response = transport.send(request).await.inspect_err(|err| {
        warn!("{} {} failed: {}", request.method.as_str(), request.path, err);
    })?;

    if !response.is_success() {
        let message = error_message(&response.body);
        warn!(
            "{} {} returned HTTP {}",
            request.method.as_str(),
            request.path,
            response.status
        );
        return Err(DispatchError::Status {
            status: response.status,
            message,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&response.body).map_err(|err| DispatchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Method;
    use serde_json::json;

    struct Fixed(Result<ApiResponse, TransportError>);

    #[async_trait(?Send)]
    impl Transport for Fixed {
        async fn send(&self, _request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            self.0.clone()
        }
    }

    fn get(path: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            path: path.to_owned(),
            body: None,
        }
    }

    fn reply(status: u16, body: &str) -> Fixed {
        Fixed(Ok(ApiResponse {
            status,
            body: body.to_owned(),
        }))
    }

    #[tokio::test]
    async fn success_parses_json() {
        let value = dispatch(&reply(200, r#"{"id":42}"#), &get("/wishlists/42"))
            .await
            .expect("2xx should succeed");
        assert_eq!(value, json!({"id": 42}));
    }

    #[tokio::test]
    async fn no_content_is_null() {
        let value = dispatch(&reply(204, ""), &get("/x")).await.expect("204 ok");
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn error_body_message_is_surfaced() {
        let err = dispatch(
            &reply(404, r#"{"status":404,"error":"Not Found","message":"Wishlist not found"}"#),
            &get("/wishlists/1"),
        )
        .await
        .expect_err("404 should fail");
        assert_eq!(err.flash_text(), "Wishlist not found");
    }

    #[tokio::test]
    async fn message_survives_unexpected_status_type() {
        let err = dispatch(
            &reply(404, r#"{"status":"error","message":"Wishlist not found"}"#),
            &get("/wishlists/1"),
        )
        .await
        .expect_err("404 should fail");
        assert_eq!(err.flash_text(), "Wishlist not found");
    }

    #[tokio::test]
    async fn empty_message_degrades_to_generic() {
        let err = dispatch(&reply(400, r#"{"message":""}"#), &get("/x"))
            .await
            .expect_err("400 should fail");
        assert_eq!(err.flash_text(), GENERIC_ERROR);
    }

    #[tokio::test]
    async fn missing_message_degrades_to_generic() {
        let err = dispatch(&reply(500, "<html>oops</html>"), &get("/x"))
            .await
            .expect_err("500 should fail");
        assert_eq!(
            err,
            DispatchError::Status {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.flash_text(), GENERIC_ERROR);
    }

    #[tokio::test]
    async fn transport_failure_is_generic() {
        let transport = Fixed(Err(TransportError("connection refused".to_owned())));
        let err = dispatch(&transport, &get("/x")).await.expect_err("should fail");
        assert!(matches!(err, DispatchError::Transport(_)));
        assert_eq!(err.flash_text(), GENERIC_ERROR);
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let err = dispatch(&reply(200, "not json"), &get("/x"))
            .await
            .expect_err("bad json");
        assert!(matches!(err, DispatchError::Decode(_)));
    }
}
