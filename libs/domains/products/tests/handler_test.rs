//! Handler tests for the catalog routes
//!
//! Exercise the products router alone over the in-memory repository:
//! envelope shape, status codes and ordering.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn seeded() -> (InMemoryProductRepository, Product, Product) {
    let repo = InMemoryProductRepository::new();
    let phone = repo
        .insert(CreateProduct::new("Phone", Decimal::new(999, 0), 50).with_category("Electronics"))
        .await
        .unwrap();
    let mut shoes = Product::new(CreateProduct::new("Shoes", Decimal::new(179, 0), 75).with_category("Clothing"));
    shoes.created_at = phone.created_at + chrono::Duration::seconds(1);
    repo.put(shoes.clone()).await;
    (repo, phone, shoes)
}

#[tokio::test]
async fn test_list_products_newest_first_in_envelope() {
    let (repo, phone, shoes) = seeded().await;
    let app = handlers::router(ProductService::new(repo));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["_id"], shoes.id.to_string());
    assert_eq!(body["data"][1]["_id"], phone.id.to_string());
    assert_eq!(body["data"][1]["price"], 999.0);
}

#[tokio::test]
async fn test_list_categories() {
    let (repo, _, _) = seeded().await;
    let app = handlers::router(ProductService::new(repo));

    let response = app.oneshot(get("/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["data"], serde_json::json!(["Clothing", "Electronics"]));
}

#[tokio::test]
async fn test_get_product_found() {
    let (repo, phone, _) = seeded().await;
    let app = handlers::router(ProductService::new(repo));

    let response = app.oneshot(get(&format!("/{}", phone.id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Phone");
    assert_eq!(body["data"]["stock"], 50);
}

#[tokio::test]
async fn test_get_product_missing_returns_404_envelope() {
    let (repo, _, _) = seeded().await;
    let app = handlers::router(ProductService::new(repo));

    let response = app
        .oneshot(get(&format!("/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, serde_json::json!({"success": false, "message": "Product not found"}));
}

#[tokio::test]
async fn test_get_product_invalid_id_returns_400() {
    let app = handlers::router(ProductService::new(InMemoryProductRepository::new()));

    let response = app.oneshot(get("/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
