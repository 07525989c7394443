//! Test harness: an in-process fake backend and helpers to drive the proxy.

#![allow(dead_code)]

use admin_proxy::{
    build_app, default_resources, resolve, AppState, BackendClient, Rewrite, RewriteTable,
};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::util::ServiceExt; // for oneshot

/// One request the fake backend received. `path` is relative to `/api`.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Clone, Debug)]
enum Scripted {
    Json(Value),
    Text(String),
}

#[derive(Clone, Default)]
struct Shared {
    calls: Arc<Mutex<Vec<Recorded>>>,
    replies: Arc<Mutex<HashMap<(Method, String), (StatusCode, Scripted)>>>,
}

pub struct FakeBackend {
    pub base_url: String,
    shared: Shared,
}

fn parse_query(uri: &Uri) -> HashMap<String, String> {
    uri.query()
        .unwrap_or("")
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let mut it = pair.splitn(2, '=');
            (
                it.next().unwrap_or("").to_string(),
                it.next().unwrap_or("").to_string(),
            )
        })
        .collect()
}

async fn handle(State(shared): State<Shared>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().trim_start_matches("/api").to_string();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    shared.calls.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: parse_query(&uri),
        body,
    });
    let reply = shared.replies.lock().unwrap().get(&(method, path)).cloned();
    match reply {
        Some((status, Scripted::Json(Value::Null))) => status.into_response(),
        Some((status, Scripted::Json(value))) => (status, Json(value)).into_response(),
        Some((status, Scripted::Text(text))) => (status, text).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "no scripted reply" })),
        )
            .into_response(),
    }
}

impl FakeBackend {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(handle).with_state(shared.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        FakeBackend {
            base_url: format!("http://{}/api", addr),
            shared,
        }
    }

    /// Script the reply for `method path`. A null body sends no body.
    pub fn reply(&self, method: Method, path: &str, status: u16, body: Value) {
        self.shared.replies.lock().unwrap().insert(
            (method, path.to_string()),
            (StatusCode::from_u16(status).unwrap(), Scripted::Json(body)),
        );
    }

    /// Script a plain-text reply.
    pub fn reply_text(&self, method: Method, path: &str, status: u16, body: &str) {
        self.shared.replies.lock().unwrap().insert(
            (method, path.to_string()),
            (StatusCode::from_u16(status).unwrap(), Scripted::Text(body.to_string())),
        );
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.shared.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.calls().last().cloned().expect("backend received no calls")
    }
}

pub fn proxy(fake: &FakeBackend) -> Rewrite<Router> {
    proxy_at(&fake.base_url)
}

/// Proxy wired to an arbitrary backend URL.
pub fn proxy_at(base_url: &str) -> Rewrite<Router> {
    // reqwest reads proxy settings from the environment; the backend is local.
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let registry = resolve(default_resources()).unwrap();
    let backend = BackendClient::new(base_url, Duration::from_secs(5)).unwrap();
    build_app(
        AppState::new(backend, registry),
        RewriteTable::with_defaults().unwrap(),
    )
}

pub async fn send(
    app: &Rewrite<Router>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    match body {
        Some(v) => send_raw(app, method, uri, Some("application/json"), v.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

/// Send a body verbatim with the given content type.
pub async fn send_raw(
    app: &Rewrite<Router>,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let body = body.into();
    let body = if body.is_empty() { Body::empty() } else { Body::from(body) };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
