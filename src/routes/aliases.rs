//! `/app` namespace: a subset of admin routes under another prefix.

use crate::handlers::{collections, resource};
use crate::routes::admin::{collection_methods, item_methods};
use crate::state::AppState;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Routes to be nested under `/app`.
pub fn app_routes(state: AppState) -> Router {
    let registry = Arc::clone(&state.registry);
    let mut router: Router<AppState> = Router::new();
    if let Some(methods) = registry.get("categories").as_ref().and_then(collection_methods) {
        router = router.route("/categories", methods);
    }
    if let Some(methods) = registry.get("products").as_ref().and_then(|s| item_methods(s, false)) {
        router = router.route("/products/:id", methods);
    }
    if let Some(spec) = registry.get("collections") {
        router = router
            .route(
                "/collections/:id",
                get(resource::read).layer(Extension(Arc::clone(&spec))),
            )
            .route(
                "/collections/:id/products",
                get(collections::list_products).layer(Extension(spec)),
            );
    }
    router.with_state(state)
}
