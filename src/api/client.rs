use crate::api::error::ActionError;
use crate::diagnostics::{log_request, RequestTimer};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Method;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const API_PREFIX: &str = "/api/v1";
pub const EVENTS_PATH: &str = "/ws";

/// One REST call against the Dim server. The token travels verbatim in the
/// `authorization` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, token: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            token: token.to_string(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, token: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            token: token.to_string(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>, token: &str) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            token: token.to_string(),
            body: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    /// Fails with the response's status text unless the status is `expected`.
    pub fn expect_status(self, expected: u16) -> Result<Self, ActionError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ActionError::status(self.status, self.status_text))
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ActionError> {
        serde_json::from_str(&self.body).map_err(|e| ActionError::Decode(e.to_string()))
    }
}

/// HTTP seam used by the action creators.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ActionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimClient {
    base_url: String,
}

impl DimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Websocket endpoint on the same host and port as the REST API.
    pub fn events_url(&self) -> String {
        let socket_base = if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            format!("ws://{}", self.base_url)
        };
        format!("{socket_base}{EVENTS_PATH}")
    }
}

#[async_trait(?Send)]
impl Transport for DimClient {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ActionError> {
        let timer = RequestTimer::start();
        let url = self.build_url(&request.path);
        let scope = format!("{} {}", request.method, request.path);

        let mut builder = HTTP_CLIENT
            .request(request.method, &url)
            .header("authorization", request.token);
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{scope} failed: {e}");
            ActionError::Transport(e.to_string())
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| ActionError::Transport(e.to_string()))?;

        log_request(&scope, timer, &format!("status={}", status.as_u16()));
        Ok(ApiResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
