//! Inventory service: the registry plus the metric update protocol.
//!
//! Writes hold the registry write lock across the mutation and the gauge
//! recomputation, so the gauges always describe a state produced by a complete
//! write. Reads share the lock and never see a half-applied write.

use std::sync::Arc;

use tokio::sync::RwLock;

use inventory_core::error::Result;
use inventory_core::{InventorySnapshot, Product, ProductPayload};

use crate::obs::InventoryMetrics;
use crate::registry::ProductRegistry;

pub struct InventoryService {
    registry: RwLock<ProductRegistry>,
    metrics: Arc<InventoryMetrics>,
}

impl InventoryService {
    pub fn new(metrics: Arc<InventoryMetrics>) -> Self {
        // Gauges start out describing the empty registry.
        metrics.update_inventory(&InventorySnapshot::default());
        Self {
            registry: RwLock::new(ProductRegistry::new()),
            metrics,
        }
    }

    pub async fn list(&self) -> Vec<Product> {
        self.registry.read().await.list()
    }

    pub async fn get(&self, id: &str) -> Result<Product> {
        self.registry.read().await.get(id)
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.registry.read().await.contains(id)
    }

    pub async fn create(&self, payload: ProductPayload) -> Product {
        let mut reg = self.registry.write().await;
        let product = reg.create(payload);
        self.metrics.observe_price(product.price);
        self.metrics.record_creation();
        self.update_inventory_metrics(&reg);
        tracing::debug!(id = %product.id, "product created");
        product
    }

    pub async fn replace(&self, id: &str, payload: ProductPayload) -> Result<Product> {
        let mut reg = self.registry.write().await;
        let product = reg.replace(id, payload)?;
        self.metrics.observe_price(product.price);
        self.update_inventory_metrics(&reg);
        tracing::debug!(id = %product.id, "product replaced");
        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut reg = self.registry.write().await;
        reg.delete(id)?;
        self.update_inventory_metrics(&reg);
        tracing::debug!(%id, "product deleted");
        Ok(())
    }

    /// Recompute the inventory gauges. Caller holds the write guard.
    fn update_inventory_metrics(&self, reg: &ProductRegistry) {
        self.metrics.update_inventory(&reg.snapshot());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use inventory_core::InventoryError;

    fn service() -> (InventoryService, Arc<InventoryMetrics>) {
        let metrics = Arc::new(InventoryMetrics::new().unwrap());
        (InventoryService::new(Arc::clone(&metrics)), metrics)
    }

    fn payload(name: &str, price: f64, quantity: i64) -> ProductPayload {
        ProductPayload { name: name.into(), price, quantity }
    }

    #[tokio::test]
    async fn create_updates_gauges_and_price_histogram() {
        let (svc, m) = service();
        svc.create(payload("Widget", 9.99, 5)).await;
        assert_eq!(m.product_count.get(), 1);
        assert_eq!(m.low_stock.get(), 1);
        assert!((m.inventory_value.get() - 49.95).abs() < 1e-9);
        assert_eq!(m.price_distribution.get_sample_count(), 1);
        assert!((m.price_distribution.get_sample_sum() - 9.99).abs() < 1e-9);
        assert_eq!(m.creation_success.get(), 1);
    }

    #[tokio::test]
    async fn replace_observes_price_but_does_not_count_creation() {
        let (svc, m) = service();
        let p = svc.create(payload("a", 1.0, 1)).await;
        svc.replace(&p.id, payload("b", 600.0, 100)).await.unwrap();
        assert_eq!(m.price_distribution.get_sample_count(), 2);
        assert_eq!(m.creation_success.get(), 1);
        assert_eq!(m.low_stock.get(), 0);
        assert_eq!(m.inventory_value.get(), 60_000.0);
    }

    #[tokio::test]
    async fn failed_writes_leave_metrics_untouched() {
        let (svc, m) = service();
        svc.create(payload("a", 3.0, 2)).await;
        let replaced = svc.replace("ghost", payload("b", 1.0, 1)).await;
        assert!(matches!(replaced, Err(InventoryError::NotFound)));
        assert!(matches!(svc.delete("ghost").await, Err(InventoryError::NotFound)));
        assert_eq!(m.price_distribution.get_sample_count(), 1);
        assert_eq!(m.product_count.get(), 1);
        assert_eq!(m.inventory_value.get(), 6.0);
    }

    #[tokio::test]
    async fn delete_leaves_only_remaining_product_in_gauges() {
        let (svc, m) = service();
        let a = svc.create(payload("a", 2.0, 50)).await;
        svc.create(payload("b", 5.0, 4)).await;
        svc.delete(&a.id).await.unwrap();
        assert_eq!(m.product_count.get(), 1);
        assert_eq!(m.inventory_value.get(), 20.0);
        assert_eq!(m.low_stock.get(), 1);
        assert!(matches!(svc.get(&a.id).await, Err(InventoryError::NotFound)));
    }

    #[tokio::test]
    async fn concurrent_creates_keep_gauges_consistent() {
        let (svc, m) = service();
        let svc = Arc::new(svc);
        let mut tasks = Vec::new();
        for i in 0..32 {
            let svc = Arc::clone(&svc);
            tasks.push(tokio::spawn(async move {
                svc.create(payload(&format!("p{i}"), 1.0, i)).await
            }));
        }
        for t in tasks {
            t.await.unwrap();
        }
        let all = svc.list().await;
        assert_eq!(all.len(), 32);
        assert_eq!(m.product_count.get(), 32);
        assert_eq!(m.low_stock.get(), 10);
        assert_eq!(m.inventory_value.get(), (0..32).sum::<i64>() as f64);
    }
}
