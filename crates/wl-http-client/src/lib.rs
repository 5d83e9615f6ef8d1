use async_trait::async_trait;
use tracing::debug;
use wl_form_sync::ops::{ApiRequest, Method};
use wl_form_sync::transport::{ApiResponse, Transport, TransportError};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Native HTTP transport for the console controller.
///
/// Reads `WISHLIST_API_URL` from environment at construction time
/// (default: `http://localhost:8080`). No request timeout is set.
pub struct ReqwestTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ReqwestTransport {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("WISHLIST_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.endpoint, request.path);
        debug!("{} {}", request.method.as_str(), url);

        let mut builder = self.http.request(method(request.method), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
