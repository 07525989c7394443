//! Admin proxy: configuration-driven API layer that reshapes admin UI requests
//! for a camelCase REST backend and reshapes the replies back.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mapping;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

use axum::Router;
use tower::Layer;

pub use config::{default_resources, resolve, ProxyConfig, ResourceRegistry, ResourceSpec};
pub use error::{AppError, BackendError, ConfigError};
pub use routes::{admin_routes, app_routes, common_routes, Rewrite, RewriteLayer, RewriteTable};
pub use service::BackendClient;
pub use state::AppState;

/// Full router: operational routes at the root, the admin API under `/admin`
/// and its aliases under `/app`.
pub fn build_router(state: AppState) -> Router {
    common_routes(state.clone())
        .nest("/admin", admin_routes(state.clone()))
        .nest("/app", app_routes(state))
}

/// Router wrapped in the rewrite layer, so rewrites happen before routing.
pub fn build_app(state: AppState, rewrites: RewriteTable) -> Rewrite<Router> {
    RewriteLayer::new(rewrites).layer(build_router(state))
}
