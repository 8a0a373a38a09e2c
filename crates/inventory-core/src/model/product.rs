use serde::{Deserialize, Serialize};

use super::payload::ProductPayload;

/// Products with a quantity strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A stored product record. The registry key always equals `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Build a record from a validated payload under the given id.
    pub fn from_payload(id: String, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
        }
    }

    /// `price * quantity` for this record.
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Derived inventory figures, recomputed from the full registry after each write.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InventorySnapshot {
    /// Sum of `price * quantity` over all products.
    pub total_value: f64,
    pub product_count: usize,
    /// Products with `quantity < LOW_STOCK_THRESHOLD`.
    pub low_stock: usize,
}

impl InventorySnapshot {
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .fold(Self::default(), |mut acc, p| {
                acc.total_value += p.value();
                acc.product_count += 1;
                if p.is_low_stock() {
                    acc.low_stock += 1;
                }
                acc
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, quantity: i64) -> Product {
        Product { id: id.into(), name: format!("p-{id}"), price, quantity }
    }

    #[test]
    fn snapshot_of_empty_inventory_is_zero() {
        let snap = InventorySnapshot::from_products(&Vec::<Product>::new());
        assert_eq!(snap, InventorySnapshot::default());
    }

    #[test]
    fn snapshot_sums_value_and_counts_low_stock() {
        let items = vec![product("a", 9.99, 5), product("b", 2.5, 10), product("c", 1.0, -3)];
        let snap = InventorySnapshot::from_products(&items);
        assert_eq!(snap.product_count, 3);
        // quantity 10 is not low stock; negative quantities are.
        assert_eq!(snap.low_stock, 2);
        let expected = 9.99 * 5.0 + 2.5 * 10.0 + 1.0 * -3.0;
        assert!((snap.total_value - expected).abs() < 1e-9);
    }

    #[test]
    fn serializes_to_flat_json_shape() {
        let json = serde_json::to_value(product("x", 1.5, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "x", "name": "p-x", "price": 1.5, "quantity": 2})
        );
    }
}
