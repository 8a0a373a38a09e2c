//! Shared application state for the inventory service.
//!
//! Built once at startup and cloned into every handler. The registry and the
//! metrics recorder live here rather than in module-level globals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use inventory_core::error::Result;

use crate::config::ServiceConfig;
use crate::inventory::InventoryService;
use crate::obs::InventoryMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    inventory: Arc<InventoryService>,
    metrics: Arc<InventoryMetrics>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    draining: AtomicBool,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let metrics = Arc::new(InventoryMetrics::new()?);
        let inventory = Arc::new(InventoryService::new(Arc::clone(&metrics)));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            inventory,
            metrics,
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn inventory(&self) -> Arc<InventoryService> {
        Arc::clone(&self.inventory)
    }

    pub fn metrics(&self) -> &InventoryMetrics {
        &self.metrics
    }

    /// Mark draining state (shutdown has begun).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
