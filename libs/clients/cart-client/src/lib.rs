//! Cart Client
//!
//! Client-side cart state for storefront front ends. The store keeps an
//! ordered list of items mirrored to durable storage after every change and
//! works in one of two modes:
//!
//! - **Guest** (no session): mutations are applied locally with the same
//!   rules the server enforces.
//! - **Authenticated**: every mutation is an HTTP call and the local list is
//!   replaced with the server's answer.
//!
//! Logging in replaces the local cart with the server's cart. Guest items
//! are not merged.
//!
//! ```rust,no_run
//! use cart_client::{CartStore, FileCartStorage, HttpCartApi, Session};
//!
//! # async fn example(product: cart_client::Product) -> cart_client::CartClientResult<()> {
//! let api = HttpCartApi::new("http://localhost:5000/api");
//! let storage = FileCartStorage::new(".storefront");
//! let mut store = CartStore::open(api, storage).await?;
//!
//! store.add_to_cart(&product, 2).await?;
//! store.login(Session::new("jwt-from-the-auth-service")).await?;
//! println!("{} items, total {}", store.cart_count(), store.cart_total());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use api::{CartApi, HttpCartApi};
pub use error::{CartClientError, CartClientResult};
pub use models::{CartItem, OrderSummary, Product, Session};
pub use storage::{CART_KEY, CartStorage, FileCartStorage, MemoryCartStorage};
pub use store::{CartStore, LoadingHandle};
