//! End-to-end: the cart store against a live cart router
//!
//! The server side runs on in-memory repositories behind a real listener, so
//! requests go through reqwest, JWT auth and the JSON envelope.

use axum::Router;
use axum_helpers::{JwtAuth, JwtConfig};
use cart_client::*;
use domain_cart::{CartLine, CartRepository, CartService, InMemoryCartRepository};
use domain_products::{CreateProduct, InMemoryProductRepository, ProductRepository};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

const SECRET: &str = "cart-client-e2e-secret-0123456789abcdef";

struct Server {
    base_url: String,
    carts: Arc<InMemoryCartRepository>,
    products: Arc<InMemoryProductRepository>,
    auth: JwtAuth,
}

async fn start_server() -> Server {
    let carts = Arc::new(InMemoryCartRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let auth = JwtAuth::new(&JwtConfig::new(SECRET));

    let service = CartService::new(carts.clone(), products.clone());
    let app = Router::new().nest(
        "/api/cart",
        domain_cart::handlers::router(service, auth.clone()),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Server {
        base_url: format!("http://{addr}/api"),
        carts,
        products,
        auth,
    }
}

impl Server {
    /// Insert a catalog product and return the client's snapshot of it
    async fn product(&self, name: &str, price: i64, stock: i32) -> Product {
        let created = self
            .products
            .insert(CreateProduct::new(name, Decimal::new(price, 0), stock))
            .await
            .unwrap();
        serde_json::from_value(serde_json::to_value(created).unwrap()).unwrap()
    }

    async fn user_with_cart(&self, lines: &[CartLine]) -> (Uuid, String) {
        let user_id = Uuid::now_v7();
        self.carts.register_user(user_id).await;
        self.carts.save_cart(user_id, lines).await.unwrap();
        (user_id, self.auth.create_access_token(user_id).unwrap())
    }
}

async fn stored_items(storage: &MemoryCartStorage) -> Vec<CartItem> {
    let raw = storage.get(CART_KEY).await.unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn test_guest_cart_is_replaced_by_server_cart_on_login() {
    let server = start_server().await;
    let guest_product = server.product("Guest Lamp", 10, 5).await;
    let server_product = server.product("Saved Chair", 40, 8).await;
    let (_, token) = server
        .user_with_cart(&[CartLine::new(server_product.id, 2)])
        .await;

    let storage = MemoryCartStorage::new();
    let mut store = CartStore::open(HttpCartApi::new(&server.base_url), storage.clone())
        .await
        .unwrap();

    store.add_to_cart(&guest_product, 1).await.unwrap();
    let persisted = stored_items(&storage).await;
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].product.id, guest_product.id);

    store.login(Session::new(token)).await.unwrap();

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.id, server_product.id);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(stored_items(&storage).await, items);
}

#[tokio::test]
async fn test_authenticated_mutations_round_trip_through_server() {
    let server = start_server().await;
    let lamp = server.product("Lamp", 10, 5).await;
    let mug = server.product("Mug", 5, 9).await;
    let (user_id, token) = server.user_with_cart(&[]).await;

    let mut store = CartStore::open(HttpCartApi::new(&server.base_url), MemoryCartStorage::new())
        .await
        .unwrap();
    store.login(Session::new(token)).await.unwrap();

    store.add_to_cart(&lamp, 2).await.unwrap();
    store.add_to_cart(&mug, 1).await.unwrap();
    store.update_quantity(lamp.id, 3).await.unwrap();
    assert_eq!(store.cart_count(), 4);
    assert_eq!(store.cart_total(), Decimal::new(35, 0));

    store.remove_from_cart(mug.id).await.unwrap();
    let saved = server.carts.load_cart(user_id).await.unwrap().unwrap();
    assert_eq!(saved, vec![CartLine::new(lamp.id, 3)]);

    store.clear_cart().await.unwrap();
    assert!(store.items().is_empty());
    assert!(server.carts.load_cart(user_id).await.unwrap().unwrap().is_empty());
}

#[tokio::test]
async fn test_server_rejection_surfaces_message() {
    let server = start_server().await;
    let chair = server.product("Chair", 40, 3).await;
    let (_, token) = server.user_with_cart(&[]).await;

    let mut store = CartStore::open(HttpCartApi::new(&server.base_url), MemoryCartStorage::new())
        .await
        .unwrap();
    store.login(Session::new(token)).await.unwrap();

    let err = store.add_to_cart(&chair, 4).await.unwrap_err();

    assert!(matches!(err, CartClientError::Server(ref m) if m == "Insufficient stock available"));
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_invalid_session_is_rejected() {
    let server = start_server().await;

    let mut store = CartStore::open(HttpCartApi::new(&server.base_url), MemoryCartStorage::new())
        .await
        .unwrap();
    let err = store.login(Session::new("not-a-jwt")).await.unwrap_err();

    assert!(matches!(err, CartClientError::Server(ref m) if m == "Invalid token"));
}
