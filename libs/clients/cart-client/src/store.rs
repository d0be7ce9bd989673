//! The cart store: local state, durable mirror, guest/authenticated paths

use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::instrument;
use uuid::Uuid;

use crate::api::CartApi;
use crate::error::{CartClientError, CartClientResult};
use crate::models::{CartItem, OrderSummary, Product, Session};
use crate::storage::{CART_KEY, CartStorage};

/// Shared view of the store's loading flag.
///
/// Clones observe the same flag; it is set for the duration of each
/// operation and only gates UI affordances.
#[derive(Clone, Debug, Default)]
pub struct LoadingHandle(Arc<AtomicBool>);

impl LoadingHandle {
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }
}

struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct CartStore<A: CartApi, S: CartStorage> {
    api: A,
    storage: S,
    session: Option<Session>,
    items: Vec<CartItem>,
    loading: LoadingHandle,
}

impl<A: CartApi, S: CartStorage> CartStore<A, S> {
    /// Restore the cart persisted under [`CART_KEY`]; starts in guest mode.
    ///
    /// A stored value that no longer parses is discarded.
    pub async fn open(api: A, storage: S) -> CartClientResult<Self> {
        let items = match storage.get(CART_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding unreadable stored cart");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Self {
            api,
            storage,
            session: None,
            items,
            loading: LoadingHandle::default(),
        })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_handle(&self) -> LoadingHandle {
        self.loading.clone()
    }

    /// Sum of price × quantity
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities, saturating at `i32::MAX`
    pub fn cart_count(&self) -> i32 {
        self.items
            .iter()
            .fold(0, |count, i| count.saturating_add(i.quantity))
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_items(&self.items)
    }

    /// Start a session and replace the local cart with the server's.
    ///
    /// Guest items that were never sent to the server are dropped.
    #[instrument(skip_all)]
    pub async fn login(&mut self, session: Session) -> CartClientResult<()> {
        self.session = Some(session);
        tracing::info!(discarded = self.items.len(), "Session started, loading server cart");
        self.sync_with_server().await
    }

    /// End the session. The last server snapshot stays as the local cart.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!(items = self.items.len(), "Session ended");
        }
    }

    /// Replace local state with the server's cart; no-op for guests.
    #[instrument(skip_all)]
    pub async fn sync_with_server(&mut self) -> CartClientResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };

        let _loading = self.loading.begin();
        let items = self.api.get_cart(&session.token).await;
        self.commit("sync cart", items).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&mut self, product: &Product, quantity: i32) -> CartClientResult<()> {
        let _loading = self.loading.begin();
        let items = match &self.session {
            Some(session) => {
                self.api
                    .add_item(&session.token, product.id, quantity)
                    .await
            }
            None => guest_add(&self.items, product, quantity),
        };
        self.commit("add to cart", items).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&mut self, product_id: Uuid) -> CartClientResult<()> {
        let _loading = self.loading.begin();
        let items = match &self.session {
            Some(session) => self.api.remove_item(&session.token, product_id).await,
            None => Ok(guest_remove(&self.items, product_id)),
        };
        self.commit("remove from cart", items).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&mut self, product_id: Uuid, quantity: i32) -> CartClientResult<()> {
        let _loading = self.loading.begin();
        let items = match &self.session {
            Some(session) => {
                self.api
                    .update_item(&session.token, product_id, quantity)
                    .await
            }
            None => guest_update(&self.items, product_id, quantity),
        };
        self.commit("update quantity", items).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&mut self) -> CartClientResult<()> {
        let _loading = self.loading.begin();
        let items = match &self.session {
            Some(session) => self.api.clear_cart(&session.token).await,
            None => Ok(Vec::new()),
        };
        self.commit("clear cart", items).await
    }

    async fn commit(
        &mut self,
        operation: &'static str,
        result: CartClientResult<Vec<CartItem>>,
    ) -> CartClientResult<()> {
        let items = result.inspect_err(|e| {
            tracing::error!(error = %e, operation, "Cart operation failed");
        })?;
        self.items = items;
        self.persist().await
    }

    async fn persist(&self) -> CartClientResult<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(CART_KEY, &raw).await
    }
}

fn guest_add(items: &[CartItem], product: &Product, quantity: i32) -> CartClientResult<Vec<CartItem>> {
    if quantity < 1 {
        return Err(CartClientError::InvalidQuantity(quantity));
    }
    if product.stock < quantity {
        return Err(CartClientError::InsufficientStock {
            available: product.stock,
            requested: quantity,
        });
    }

    let mut next = items.to_vec();
    match next.iter_mut().find(|i| i.product.id == product.id) {
        Some(item) => {
            item.quantity = item.quantity.checked_add(quantity).ok_or(
                CartClientError::InsufficientStock {
                    available: product.stock,
                    requested: quantity,
                },
            )?;
        }
        None => next.push(CartItem::new(product.clone(), quantity)),
    }
    Ok(next)
}

fn guest_update(items: &[CartItem], product_id: Uuid, quantity: i32) -> CartClientResult<Vec<CartItem>> {
    if quantity < 1 {
        return Err(CartClientError::InvalidQuantity(quantity));
    }

    let mut next = items.to_vec();
    let item = next
        .iter_mut()
        .find(|i| i.product.id == product_id)
        .ok_or(CartClientError::ItemNotFound(product_id))?;

    if item.product.stock < quantity {
        return Err(CartClientError::InsufficientStock {
            available: item.product.stock,
            requested: quantity,
        });
    }

    item.quantity = quantity;
    Ok(next)
}

fn guest_remove(items: &[CartItem], product_id: Uuid) -> Vec<CartItem> {
    items
        .iter()
        .filter(|i| i.product.id != product_id)
        .cloned()
        .collect()
}
