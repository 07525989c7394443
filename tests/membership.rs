mod common;

use axum::http::{Method, StatusCode};
use common::{proxy, send, FakeBackend};
use serde_json::json;

#[tokio::test]
async fn every_body_shape_makes_the_same_backend_call() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::POST, "/customers/groups/3/customers", 200, json!({ "id": 3 }));
    let app = proxy(&fake);

    let shapes = [
        json!({ "customer_ids": ["7", "8"] }),
        json!({ "add": ["7", "8"] }),
        json!({ "payload": { "customer_ids": ["7", "8"] } }),
        json!({ "data": { "customer_ids": ["7", "8"] } }),
    ];
    for shape in shapes {
        let (status, body) = send(&app, Method::POST, "/admin/customer-groups/3/customers", Some(shape)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 3 }));
    }

    let calls = fake.calls();
    assert_eq!(calls.len(), 4);
    for call in calls {
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/customers/groups/3/customers");
        assert_eq!(call.body, json!({ "customer_ids": ["7", "8"] }));
    }
}

#[tokio::test]
async fn missing_customer_ids_is_bad_request() {
    let fake = FakeBackend::start().await;
    let app = proxy(&fake);

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/customer-groups/3/customers",
        Some(json!({ "customer_ids": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_data");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn removal_sends_a_delete_with_body() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::DELETE, "/customers/groups/3/customers", 200, serde_json::Value::Null);
    let app = proxy(&fake);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/admin/customer-groups/3/customers",
        Some(json!({ "remove": ["9"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
    let call = fake.last();
    assert_eq!(call.method, Method::DELETE);
    assert_eq!(call.body, json!({ "customer_ids": ["9"] }));
}

#[tokio::test]
async fn customer_groups_are_added_then_removed() {
    let fake = FakeBackend::start().await;
    fake.reply(Method::POST, "/customers/4/customer-groups", 200, json!({ "step": "add" }));
    fake.reply(Method::POST, "/customers/4/customer-groups/remove", 200, json!({ "step": "remove" }));
    let app = proxy(&fake);

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/customers/4/customer-groups",
        Some(json!({ "add": ["g1"], "remove": ["g2"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "step": "remove" }));
    let calls = fake.calls();
    assert_eq!(calls[0].body, json!({ "groupIds": ["g1"] }));
    assert_eq!(calls[1].path, "/customers/4/customer-groups/remove");
    assert_eq!(calls[1].body, json!({ "groupIds": ["g2"] }));
}
