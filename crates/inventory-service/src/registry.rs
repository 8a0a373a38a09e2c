//! Product registry: id -> Product, owned in process memory.
//!
//! The registry itself does no locking; `InventoryService` wraps it in a
//! `RwLock` and decides how long each write holds the lock.

use std::collections::HashMap;

use uuid::Uuid;

use inventory_core::error::{InventoryError, Result};
use inventory_core::{InventorySnapshot, Product, ProductPayload};

/// Invariant: every key equals the `id` of its value.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: HashMap<String, Product>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, in no particular order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Result<Product> {
        self.products.get(id).cloned().ok_or(InventoryError::NotFound)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Store a new product under a freshly generated id.
    pub fn create(&mut self, payload: ProductPayload) -> Product {
        let id = Uuid::new_v4().to_string();
        let product = Product::from_payload(id.clone(), payload);
        self.products.insert(id, product.clone());
        product
    }

    /// Overwrite every field of an existing product, keeping its id.
    pub fn replace(&mut self, id: &str, payload: ProductPayload) -> Result<Product> {
        let slot = self.products.get_mut(id).ok_or(InventoryError::NotFound)?;
        *slot = Product::from_payload(id.to_string(), payload);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<Product> {
        self.products.remove(id).ok_or(InventoryError::NotFound)
    }

    /// Full pass over the registry.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::from_products(self.products.values())
    }
}
