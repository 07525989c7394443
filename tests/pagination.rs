mod common;

use axum::http::{Method, StatusCode};
use common::{proxy, send, FakeBackend};
use serde_json::json;

#[tokio::test]
async fn offset_limit_becomes_page_size() {
    let fake = FakeBackend::start().await;
    fake.reply(
        Method::GET,
        "/products",
        200,
        json!({ "products": [{ "id": 1, "title": "Mug", "status": "PUBLISHED" }], "totalElements": 61, "page": 2, "size": 20 }),
    );
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/admin/products?offset=45&limit=20", None).await;

    assert_eq!(status, StatusCode::OK);
    let call = fake.last();
    assert_eq!(call.query.get("page").map(String::as_str), Some("2"));
    assert_eq!(call.query.get("size").map(String::as_str), Some("20"));
    assert_eq!(body["offset"], 45);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["count"], 61);
    assert_eq!(body["products"][0]["status"], "published");
}

#[tokio::test]
async fn offset_limit_resources_pass_the_window_through() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::GET, "/reservations", 200, json!({ "reservations": [], "count": 0 }));
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/admin/reservations?offset=30&limit=15", None).await;

    assert_eq!(status, StatusCode::OK);
    let call = fake.last();
    assert_eq!(call.query.get("offset").map(String::as_str), Some("30"));
    assert_eq!(call.query.get("limit").map(String::as_str), Some("15"));
    assert!(call.query.get("page").is_none());
    assert_eq!(body, json!({ "reservations": [], "count": 0, "offset": 30, "limit": 15 }));
}

#[tokio::test]
async fn resource_default_limit_applies() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::GET, "/campaigns", 200, json!({ "campaigns": [] }));
    let app = proxy(&fake);

    let (_, body) = send(&app, Method::GET, "/admin/campaigns", None).await;

    assert_eq!(body["limit"], 20);
    assert_eq!(fake.last().query.get("size").map(String::as_str), Some("20"));
}

#[tokio::test]
async fn invalid_offset_is_bad_request() {
    let fake = FakeBackend::start().await;
    let app = proxy(&fake);

    let (status, body) = send(&app, Method::GET, "/admin/products?offset=abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid offset: abc");
    assert!(fake.calls().is_empty());
}
