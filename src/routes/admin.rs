//! Admin routes built from the resource registry. Each method router carries its
//! resource as an `Extension<Arc<ResourceSpec>>`; a few operations are served
//! by dedicated handlers instead of the generic ones.

use crate::config::{Operation, ResourceRegistry, ResourceSpec};
use crate::handlers::{campaigns, categories, collections, customers, inventory, promotions, resource};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, MethodRouter},
    Extension, Router,
};
use std::sync::Arc;

fn combine<I>(spec: &Arc<ResourceSpec>, parts: I) -> Option<MethodRouter<AppState>>
where
    I: IntoIterator<Item = Option<MethodRouter<AppState>>>,
{
    parts
        .into_iter()
        .flatten()
        .reduce(MethodRouter::merge)
        .map(|m| m.layer(Extension(Arc::clone(spec))))
}

/// `/{resource}`: list and create.
pub(crate) fn collection_methods(spec: &Arc<ResourceSpec>) -> Option<MethodRouter<AppState>> {
    let list = match spec.name {
        "promotions" => Some(get(promotions::list)),
        "product-categories" => Some(get(categories::list)),
        _ => spec.supports(Operation::List).then(|| get(resource::list)),
    };
    let create = match spec.name {
        "inventory-items" => Some(post(inventory::create)),
        "product-categories" => Some(post(categories::create)),
        _ => spec.supports(Operation::Create).then(|| post(resource::create)),
    };
    combine(spec, [list, create])
}

/// `/{resource}/:id`: read, update (POST or PUT) and, unless this is an alias,
/// delete.
pub(crate) fn item_methods(spec: &Arc<ResourceSpec>, with_delete: bool) -> Option<MethodRouter<AppState>> {
    let read = match spec.name {
        "campaigns" => Some(get(campaigns::read)),
        _ => spec.supports(Operation::Read).then(|| get(resource::read)),
    };
    let update = spec
        .supports(Operation::Update)
        .then(|| post(resource::update).put(resource::update));
    let remove = (with_delete && spec.supports(Operation::Delete)).then(|| delete(resource::delete));
    combine(spec, [read, update, remove])
}

/// Nested routes under `/{resource}/:id/...`.
fn sub_resources(spec: &Arc<ResourceSpec>) -> Vec<(&'static str, MethodRouter<AppState>)> {
    let routes = match spec.name {
        "campaigns" => vec![(
            "promotions",
            get(campaigns::list_promotions).post(campaigns::manage_promotions),
        )],
        "collections" => vec![(
            "products",
            get(collections::list_products)
                .post(collections::add_products)
                .delete(collections::remove_products),
        )],
        "customers" => vec![("customer-groups", post(customers::update_groups))],
        "customer-groups" => vec![(
            "customers",
            post(customers::add_customers).delete(customers::remove_customers),
        )],
        "inventory-items" => vec![("location-levels", get(inventory::location_levels))],
        _ => Vec::new(),
    };
    routes
        .into_iter()
        .map(|(suffix, m)| (suffix, m.layer(Extension(Arc::clone(spec)))))
        .collect()
}

/// Resources that also answer on `/{resource}/:id/edit`.
const EDIT_ALIASES: &[&str] = &["collections", "product-categories", "inventory-items"];

/// Routes for every registered resource, without state.
pub(crate) fn resource_router(registry: &ResourceRegistry) -> Router<AppState> {
    let mut router = Router::new();
    for spec in registry.iter() {
        let base = format!("/{}", spec.name);
        if let Some(methods) = collection_methods(spec) {
            router = router.route(&base, methods);
        }
        if let Some(methods) = item_methods(spec, true) {
            router = router.route(&format!("{}/:id", base), methods);
        }
        if EDIT_ALIASES.contains(&spec.name) {
            if let Some(methods) = item_methods(spec, false) {
                router = router.route(&format!("{}/:id/edit", base), methods);
            }
        }
        for (suffix, methods) in sub_resources(spec) {
            router = router.route(&format!("{}/:id/{}", base, suffix), methods);
        }
    }
    if let Some(spec) = registry.get("product-categories") {
        if let Some(methods) = collection_methods(&spec) {
            router = router.route("/product-categories/create", methods);
        }
    }
    router
}

/// Admin API, to be nested under `/admin`.
pub fn admin_routes(state: AppState) -> Router {
    let registry = Arc::clone(&state.registry);
    resource_router(&registry).with_state(state)
}
