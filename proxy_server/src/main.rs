//! Admin proxy server: reads settings from the environment (and `.env`),
//! resolves the resource registry, and serves the admin API.
//!
//! Run from repo root: `cargo run -p proxy-server`

use admin_proxy::{
    build_router, default_resources, resolve, AppState, BackendClient, ProxyConfig, RewriteLayer,
    RewriteTable,
};
use axum::extract::Request;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("admin_proxy=info,proxy_server=info")),
        )
        .init();

    let config = ProxyConfig::from_env()?;
    let registry = resolve(default_resources())?;
    let backend = BackendClient::new(&config.backend_url, config.backend_timeout)?;
    tracing::info!(
        backend = %config.backend_url,
        resources = registry.len(),
        "resource registry resolved"
    );

    let mut rewrites = RewriteTable::with_defaults()?;
    if let Some(path) = &config.rewrites_path {
        let extra = admin_proxy::config::load_rewrites_from_path(path).await?;
        rewrites.extend_from_config(&extra)?;
        tracing::info!(path = %path, rules = rewrites.len(), "rewrite rules loaded");
    }

    let state = AppState::new(backend, registry);
    let router = build_router(state)
        .layer(RequestBodyLimitLayer::new(config.request_body_limit))
        .layer(TraceLayer::new_for_http());
    let app = RewriteLayer::new(rewrites).layer(router);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
