//! HTTP access to the `/cart` endpoints

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::error::{CartClientError, CartClientResult};
use crate::models::CartItem;

/// Server-side cart operations. Each returns the cart as the server now
/// holds it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartApi: Send + Sync {
    async fn get_cart(&self, token: &str) -> CartClientResult<Vec<CartItem>>;

    async fn add_item(
        &self,
        token: &str,
        product_id: Uuid,
        quantity: i32,
    ) -> CartClientResult<Vec<CartItem>>;

    async fn update_item(
        &self,
        token: &str,
        product_id: Uuid,
        quantity: i32,
    ) -> CartClientResult<Vec<CartItem>>;

    async fn remove_item(&self, token: &str, product_id: Uuid) -> CartClientResult<Vec<CartItem>>;

    async fn clear_cart(&self, token: &str) -> CartClientResult<Vec<CartItem>>;
}

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

impl<T: Default> Envelope<T> {
    fn into_result(self) -> CartClientResult<T> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(CartClientError::Server(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            ))
        }
    }
}

/// [`CartApi`] over reqwest
#[derive(Clone, Debug)]
pub struct HttpCartApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCartApi {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}/cart{}", self.base_url, path))
            .bearer_auth(token)
    }

    async fn send<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> CartClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<Envelope<T>>(&bytes) {
            Ok(envelope) => envelope.into_result(),
            Err(_) if !status.is_success() => {
                Err(CartClientError::Server(format!("API error: {status}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn get_cart(&self, token: &str) -> CartClientResult<Vec<CartItem>> {
        self.send(self.request(Method::GET, "", token)).await
    }

    async fn add_item(
        &self,
        token: &str,
        product_id: Uuid,
        quantity: i32,
    ) -> CartClientResult<Vec<CartItem>> {
        let body = json!({ "productId": product_id, "quantity": quantity });
        self.send(self.request(Method::POST, "/add", token).json(&body))
            .await
    }

    async fn update_item(
        &self,
        token: &str,
        product_id: Uuid,
        quantity: i32,
    ) -> CartClientResult<Vec<CartItem>> {
        let body = json!({ "productId": product_id, "quantity": quantity });
        self.send(self.request(Method::PUT, "/update", token).json(&body))
            .await
    }

    async fn remove_item(&self, token: &str, product_id: Uuid) -> CartClientResult<Vec<CartItem>> {
        let path = format!("/remove/{product_id}");
        self.send(self.request(Method::DELETE, &path, token)).await
    }

    async fn clear_cart(&self, token: &str) -> CartClientResult<Vec<CartItem>> {
        self.send(self.request(Method::DELETE, "/clear", token))
            .await
    }
}
