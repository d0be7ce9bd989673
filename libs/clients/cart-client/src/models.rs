use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sales tax applied to the subtotal
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Point-in-time snapshot of a catalog product as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub stock: i32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// An authenticated session; its presence switches the store to server mode.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[redacted]")
            .finish()
    }
}

/// Figures shown next to the cart before checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_count: i32,
    pub subtotal: Decimal,
    /// Always free
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    pub fn from_items(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        let item_count = items
            .iter()
            .fold(0i32, |count, i| count.saturating_add(i.quantity));
        let tax = subtotal * TAX_RATE;

        Self {
            item_count,
            subtotal,
            shipping: Decimal::ZERO,
            tax: to_cents(tax),
            total: to_cents(subtotal + tax),
        }
    }
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
