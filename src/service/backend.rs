//! HTTP client for the backend REST service.

use crate::config::UpdateVerb;
use crate::error::{BackendError, ConfigError};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Shared backend client. Cloning is cheap; the connection pool is shared.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Load(format!("backend client: {}", e)))?;
        Ok(BackendClient {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, BackendError> {
        let url = self.url(path);
        let request = self.http.get(&url).query(query);
        self.send(Method::GET, &url, request).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, BackendError> {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);
        self.send(Method::POST, &url, request).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, BackendError> {
        let url = self.url(path);
        let request = self.http.put(&url).json(body);
        self.send(Method::PUT, &url, request).await
    }

    /// DELETE, optionally with a JSON body (membership removals carry one).
    pub async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Value, BackendError> {
        let url = self.url(path);
        let mut request = self.http.delete(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(Method::DELETE, &url, request).await
    }

    pub async fn update(&self, verb: UpdateVerb, path: &str, body: &Value) -> Result<Value, BackendError> {
        match verb {
            UpdateVerb::Post => self.post(path, body).await,
            UpdateVerb::Put => self.put(path, body).await,
        }
    }

    /// Succeeds when the backend answers at all, whatever the status.
    pub async fn ping(&self) -> Result<(), BackendError> {
        self.http.get(self.base_url.as_ref()).send().await?;
        Ok(())
    }

    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<Value, BackendError> {
        tracing::debug!(%method, url, "backend request");
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, url, error = %e, "backend unreachable");
            BackendError::Transport(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let message = error_message(&bytes)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("backend error").to_string());
            tracing::warn!(%method, url, status = status.as_u16(), %message, "backend returned error");
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Backend `message` field if the error body is JSON, else the raw text.
fn error_message(bytes: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(v) => v.get("message").and_then(Value::as_str).map(String::from),
        Err(_) => Some(String::from_utf8_lossy(bytes).trim().to_string()).filter(|s| !s.is_empty()),
    }
}
