mod common;

use axum::http::{Method, StatusCode};
use common::{proxy, send, FakeBackend};
use serde_json::json;

#[tokio::test]
async fn health_is_ok() {
    let fake = FakeBackend::start().await;
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn api_admin_prefix_is_rewritten() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::GET, "/products/7", 200, json!({ "id": 7, "title": "Mug" }));
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/api/admin/products/7", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["title"], "Mug");
    assert_eq!(fake.last().path, "/products/7");
}

#[tokio::test]
async fn store_categories_reach_the_category_list() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::GET, "/categories", 200, json!({ "categories": [] }));
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/store/product-categories?limit=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 5);
    assert_eq!(fake.last().path, "/categories");
}

#[tokio::test]
async fn app_alias_updates_products_without_delete() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::PUT, "/products/7", 200, json!({ "id": 7, "title": "Mug" }));
    let app = proxy(&fake);

    let (status, _) = send(&app, Method::POST, "/app/products/7", Some(json!({ "title": "Mug" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/app/products/7", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
