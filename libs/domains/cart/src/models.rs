use domain_products::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One entry of a stored cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    /// Product id, stored under `product`
    #[serde(rename = "product")]
    pub product_id: Uuid,
    pub quantity: i32,
}

impl CartLine {
    pub fn new(product_id: Uuid, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A cart line with its product resolved, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

/// Ordered lines with at most one line per product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Sum into an existing line for the product, or append a new one.
    ///
    /// Returns `false` and leaves the line untouched if the sum would
    /// overflow.
    pub fn add(&mut self, product_id: Uuid, quantity: i32) -> bool {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => match line.quantity.checked_add(quantity) {
                Some(total) => {
                    line.quantity = total;
                    true
                }
                None => false,
            },
            None => {
                self.lines.push(CartLine::new(product_id, quantity));
                true
            }
        }
    }

    /// Set an existing line to an absolute quantity; `false` if absent.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: i32) -> bool {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Drop every line for the product. Absent products are a no-op.
    pub fn remove(&mut self, product_id: Uuid) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Uuid,
    /// Defaults to 1
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_existing_line() {
        let a = Uuid::new_v4();
        let mut cart = Cart::default();

        assert!(cart.add(a, 2));
        assert!(cart.add(a, 3));

        assert_eq!(cart.lines(), &[CartLine::new(a, 5)]);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut cart = Cart::default();

        cart.add(a, 1);
        cart.add(b, 1);
        cart.add(a, 1);

        assert_eq!(cart.lines(), &[CartLine::new(a, 2), CartLine::new(b, 1)]);
    }

    #[test]
    fn test_add_refuses_overflowing_line() {
        let a = Uuid::new_v4();
        let mut cart = Cart::from_lines(vec![CartLine::new(a, i32::MAX)]);

        assert!(!cart.add(a, 1));
        assert_eq!(cart.lines(), &[CartLine::new(a, i32::MAX)]);
    }

    #[test]
    fn test_set_quantity_replaces_or_reports_missing() {
        let a = Uuid::new_v4();
        let mut cart = Cart::from_lines(vec![CartLine::new(a, 4)]);

        assert!(cart.set_quantity(a, 1));
        assert_eq!(cart.line(a).map(|l| l.quantity), Some(1));
        assert!(!cart.set_quantity(Uuid::new_v4(), 3));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let a = Uuid::new_v4();
        let mut cart = Cart::from_lines(vec![CartLine::new(a, 1)]);

        cart.remove(Uuid::new_v4());
        assert_eq!(cart.lines().len(), 1);

        cart.remove(a);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_serializes_product_field() {
        let a = Uuid::new_v4();
        let json = serde_json::to_value(CartLine::new(a, 2)).unwrap();
        assert_eq!(json, serde_json::json!({"product": a.to_string(), "quantity": 2}));
    }

    #[test]
    fn test_add_request_quantity_defaults_to_one() {
        let id = Uuid::new_v4();
        let req: AddToCartRequest =
            serde_json::from_value(serde_json::json!({ "productId": id })).unwrap();
        assert_eq!(req.quantity, 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_zero() {
        let req = UpdateCartRequest {
            product_id: Uuid::new_v4(),
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }
}
