//! Cart Service - load, mutate, save, resolve

use domain_products::{Product, ProductRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::models::{Cart, CartItem, CartLine};
use crate::repository::CartRepository;

pub struct CartService<C: CartRepository, P: ProductRepository> {
    carts: Arc<C>,
    products: Arc<P>,
}

impl<C: CartRepository, P: ProductRepository> CartService<C, P> {
    pub fn new(carts: Arc<C>, products: Arc<P>) -> Self {
        Self { carts, products }
    }

    /// The user's cart with products resolved, in line order.
    ///
    /// Lines whose product no longer exists are left out of the result but
    /// stay in the stored document.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: Uuid) -> CartResult<Vec<CartItem>> {
        let cart = self.load(user_id).await?;
        self.resolve(cart.lines()).await
    }

    /// Add `quantity` of a product, summing into an existing line.
    ///
    /// Stock is checked against `quantity` alone, not the resulting line
    /// total. A line that would overflow `i32` is rejected as insufficient
    /// stock.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> CartResult<Vec<CartItem>> {
        ensure_positive(quantity)?;
        let product = self.check_stock(product_id, quantity).await?;

        let mut cart = self.load(user_id).await?;
        if !cart.add(product_id, quantity) {
            return Err(CartError::InsufficientStock {
                available: product.stock,
                requested: quantity,
            });
        }
        self.save(user_id, &cart).await?;

        tracing::info!(%user_id, %product_id, quantity, "Item added to cart");

        let reloaded = self.load(user_id).await?;
        self.resolve(reloaded.lines()).await
    }

    /// Set an existing line to an absolute quantity.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> CartResult<Vec<CartItem>> {
        ensure_positive(quantity)?;
        self.check_stock(product_id, quantity).await?;

        let mut cart = self.load(user_id).await?;
        if !cart.set_quantity(product_id, quantity) {
            return Err(CartError::ItemNotFound(product_id));
        }
        self.save(user_id, &cart).await?;

        tracing::info!(%user_id, %product_id, quantity, "Cart line updated");
        self.resolve(cart.lines()).await
    }

    /// Remove a product's line; absent lines are not an error.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> CartResult<Vec<CartItem>> {
        let mut cart = self.load(user_id).await?;
        cart.remove(product_id);
        self.save(user_id, &cart).await?;

        tracing::info!(%user_id, %product_id, "Item removed from cart");
        self.resolve(cart.lines()).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: Uuid) -> CartResult<Vec<CartItem>> {
        let mut cart = self.load(user_id).await?;
        cart.clear();
        self.save(user_id, &cart).await?;

        tracing::info!(%user_id, "Cart cleared");
        Ok(Vec::new())
    }

    async fn load(&self, user_id: Uuid) -> CartResult<Cart> {
        self.carts
            .load_cart(user_id)
            .await?
            .map(Cart::from_lines)
            .ok_or(CartError::UserNotFound(user_id))
    }

    async fn save(&self, user_id: Uuid, cart: &Cart) -> CartResult<()> {
        if self.carts.save_cart(user_id, cart.lines()).await? {
            Ok(())
        } else {
            Err(CartError::UserNotFound(user_id))
        }
    }

    async fn check_stock(&self, product_id: Uuid, quantity: i32) -> CartResult<Product> {
        let product = self
            .products
            .get_by_id(product_id)
            .await?
            .ok_or(CartError::ProductNotFound(product_id))?;

        if !product.has_stock_for(quantity) {
            return Err(CartError::InsufficientStock {
                available: product.stock,
                requested: quantity,
            });
        }

        Ok(product)
    }

    async fn resolve(&self, lines: &[CartLine]) -> CartResult<Vec<CartItem>> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = lines.iter().map(|l| l.product_id).collect();
        let mut by_id: HashMap<Uuid, Product> = self
            .products
            .get_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let items = lines
            .iter()
            .filter_map(|line| match by_id.remove(&line.product_id) {
                Some(product) => Some(CartItem {
                    product,
                    quantity: line.quantity,
                }),
                None => {
                    tracing::warn!(product_id = %line.product_id, "Cart line references a missing product");
                    None
                }
            })
            .collect();

        Ok(items)
    }
}

fn ensure_positive(quantity: i32) -> CartResult<()> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl<C: CartRepository, P: ProductRepository> Clone for CartService<C, P> {
    fn clone(&self) -> Self {
        Self {
            carts: Arc::clone(&self.carts),
            products: Arc::clone(&self.products),
        }
    }
}
