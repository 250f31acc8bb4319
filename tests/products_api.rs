use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use product_api::{
    config::HttpConfig, core::error::ErrorResponse, create_routes,
    infrastructure::memory::InMemoryProductRepository, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn create_test_app() -> Router {
    let repository = Arc::new(InMemoryProductRepository::new());
    create_routes(AppState::new(repository), &HttpConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_widget(app: &Router) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Widget", "price": 9.99, "sku": "WID-001" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = create_test_app();

    let created = create_widget(&app).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(Uuid::parse_str(&id).is_ok());
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["price"], 9.99);
    assert_eq!(created["sku"], "WID-001");
    assert_eq!(created["missingLetter"], "a");

    let (status, fetched) = send_json(&app, Method::GET, &format!("/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &format!("/products/{}", id),
        Some(json!({ "name": "Widget2", "price": 19.99, "sku": "WID-001B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Widget2");
    assert_eq!(updated["price"], 19.99);
    // sku 创建后不可修改
    assert_eq!(updated["sku"], "WID-001");

    let (status, bytes) = send(&app, Method::DELETE, &format!("/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "Product deleted successfully");

    let (status, body) = send_json(&app, Method::GET, &format!("/products/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_with_id_is_bad_request() {
    let app = create_test_app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/products",
        Some(json!({
            "id": Uuid::new_v4(),
            "name": "Widget",
            "price": 9.99,
            "sku": "WID-001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, 400);

    let (_, list) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_validation_errors() {
    let app = create_test_app();

    for payload in [
        json!({ "name": "   ", "price": 9.99, "sku": "WID-001" }),
        json!({ "name": "Widget", "price": 0.0, "sku": "WID-001" }),
        json!({ "name": "Widget", "price": -3.5, "sku": "WID-001" }),
        json!({ "name": "Widget", "price": 9.99, "sku": "" }),
    ] {
        let (status, body) = send_json(&app, Method::POST, "/products", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    let created = create_widget(&app).await;
    let (status, _) = send_json(
        &app,
        Method::PUT,
        &format!("/products/{}", created["id"].as_str().unwrap()),
        Some(json!({ "name": "", "price": 9.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_requests() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Widget" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_duplicate_sku_is_conflict() {
    let app = create_test_app();
    create_widget(&app).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Gadget", "price": 1.5, "sku": "WID-001" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_update_ignores_body_id() {
    let app = create_test_app();
    let created = create_widget(&app).await;
    let id = created["id"].as_str().unwrap().to_string();
    let other = Uuid::new_v4();

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &format!("/products/{}", id),
        Some(json!({ "id": other, "name": "New", "price": 2.0, "sku": "WID-001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "New");

    let (_, list) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send_json(&app, Method::GET, &format!("/products/{}", other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let app = create_test_app();
    let (status, _) = send_json(
        &app,
        Method::PUT,
        &format!("/products/{}", Uuid::new_v4()),
        Some(json!({ "name": "Widget", "price": 9.99, "sku": "WID-001" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_product_succeeds() {
    let app = create_test_app();
    let (status, bytes) =
        send(&app, Method::DELETE, &format!("/products/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "Product deleted successfully");
}

#[tokio::test]
async fn test_list_products() {
    let app = create_test_app();
    let names = ["Alpha", "Bravo", "abcdefghijklmnopqrstuvwxyz"];

    for (i, name) in names.iter().enumerate() {
        let (status, _) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": name, "price": 1.0 + i as f64, "sku": format!("SKU-{}", i) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), names.len());
    let mut listed: Vec<&str> = products.iter().map(|p| p["name"].as_str().unwrap()).collect();
    listed.sort();
    let mut expected = names.to_vec();
    expected.sort();
    assert_eq!(listed, expected);

    let full = products
        .iter()
        .find(|p| p["name"] == "abcdefghijklmnopqrstuvwxyz")
        .unwrap();
    assert!(full["missingLetter"].is_null());
}
