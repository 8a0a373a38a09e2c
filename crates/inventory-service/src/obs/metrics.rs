//! Metrics recorder for the product API.
//!
//! Request counters, error counters, and the duration histogram are labeled by
//! `(method, endpoint)` where `endpoint` is the route template, never the
//! concrete id, so label cardinality stays fixed at five pairs. Inventory
//! gauges are overwritten from a full registry snapshot after every write.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, HistogramTimer, HistogramVec, IntCounter,
    IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

use inventory_core::error::{InventoryError, Result};
use inventory_core::InventorySnapshot;

use super::http::HttpMetrics;

const REQUEST_DURATION_BUCKETS: [f64; 4] = [0.1, 0.5, 1.0, 5.0];
const PRICE_BUCKETS: [f64; 5] = [10.0, 50.0, 100.0, 500.0, 1000.0];

/// Instrumented product routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListProducts,
    GetProduct,
    CreateProduct,
    ReplaceProduct,
    DeleteProduct,
}

impl Endpoint {
    pub fn method(self) -> &'static str {
        match self {
            Endpoint::ListProducts | Endpoint::GetProduct => "GET",
            Endpoint::CreateProduct => "POST",
            Endpoint::ReplaceProduct => "PUT",
            Endpoint::DeleteProduct => "DELETE",
        }
    }

    /// Label value for the `endpoint` dimension.
    pub fn template(self) -> &'static str {
        match self {
            Endpoint::ListProducts | Endpoint::CreateProduct => "/products",
            Endpoint::GetProduct | Endpoint::ReplaceProduct | Endpoint::DeleteProduct => {
                "/products/<id>"
            }
        }
    }

    fn labels(self) -> [&'static str; 2] {
        [self.method(), self.template()]
    }
}

/// Scope guard for one handler invocation.
///
/// Dropping it records the elapsed time, so the duration is observed exactly
/// once on every exit path, including early returns and unwinding.
#[must_use = "the request duration is recorded when the scope is dropped"]
pub struct RequestScope {
    _timer: HistogramTimer,
}

pub(crate) fn map_prom(e: prometheus::Error) -> InventoryError {
    InventoryError::Internal(format!("metrics: {e}"))
}

pub struct InventoryMetrics {
    registry: Registry,
    pub requests: IntCounterVec,
    pub errors: IntCounterVec,
    pub request_duration: HistogramVec,
    pub inventory_value: Gauge,
    pub product_count: IntGauge,
    pub low_stock: IntGauge,
    pub price_distribution: Histogram,
    pub creation_success: IntCounter,
    /// Per-route method/path/status series fed by `obs::http::track_http`.
    pub http: HttpMetrics,
}

impl InventoryMetrics {
    /// Create and register every metric on a fresh registry.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("product_requests_total", "Total number of product requests"),
            &["method", "endpoint"],
        )
        .map_err(map_prom)?;
        let errors = IntCounterVec::new(
            Opts::new("product_errors_total", "Total number of errors in product requests"),
            &["method", "endpoint"],
        )
        .map_err(map_prom)?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "product_request_duration_seconds",
                "Request duration for product endpoints",
            )
            .buckets(REQUEST_DURATION_BUCKETS.to_vec()),
            &["method", "endpoint"],
        )
        .map_err(map_prom)?;
        let inventory_value = Gauge::new(
            "product_inventory_value",
            "Total value of inventory (price * quantity)",
        )
        .map_err(map_prom)?;
        let product_count = IntGauge::new("product_count", "Total number of products in inventory")
            .map_err(map_prom)?;
        let low_stock = IntGauge::new(
            "product_low_stock",
            "Number of products with low stock (quantity < 10)",
        )
        .map_err(map_prom)?;
        let price_distribution = Histogram::with_opts(
            HistogramOpts::new("product_price_distribution", "Distribution of product prices")
                .buckets(PRICE_BUCKETS.to_vec()),
        )
        .map_err(map_prom)?;
        let creation_success = IntCounter::new(
            "product_creation_success_total",
            "Total number of successful product creations",
        )
        .map_err(map_prom)?;

        registry.register(Box::new(requests.clone())).map_err(map_prom)?;
        registry.register(Box::new(errors.clone())).map_err(map_prom)?;
        registry.register(Box::new(request_duration.clone())).map_err(map_prom)?;
        registry.register(Box::new(inventory_value.clone())).map_err(map_prom)?;
        registry.register(Box::new(product_count.clone())).map_err(map_prom)?;
        registry.register(Box::new(low_stock.clone())).map_err(map_prom)?;
        registry.register(Box::new(price_distribution.clone())).map_err(map_prom)?;
        registry.register(Box::new(creation_success.clone())).map_err(map_prom)?;

        let http = HttpMetrics::register(&registry)?;

        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .map_err(map_prom)?;

        tracing::debug!("inventory metrics registered");

        Ok(Self {
            registry,
            requests,
            errors,
            request_duration,
            inventory_value,
            product_count,
            low_stock,
            price_distribution,
            creation_success,
            http,
        })
    }

    /// Count the request and start its duration measurement.
    pub fn begin_request(&self, ep: Endpoint) -> RequestScope {
        let labels = ep.labels();
        self.requests.with_label_values(&labels).inc();
        RequestScope {
            _timer: self.request_duration.with_label_values(&labels).start_timer(),
        }
    }

    /// Count a 4xx outcome for this endpoint.
    pub fn record_error(&self, ep: Endpoint) {
        self.errors.with_label_values(&ep.labels()).inc();
    }

    /// Observe a stored price (successful create or replace).
    pub fn observe_price(&self, price: f64) {
        self.price_distribution.observe(price);
    }

    pub fn record_creation(&self) {
        self.creation_success.inc();
    }

    /// Overwrite the inventory gauges from a full-registry snapshot.
    pub fn update_inventory(&self, snap: &InventorySnapshot) {
        self.inventory_value.set(snap.total_value);
        self.product_count.set(gauge_count(snap.product_count));
        self.low_stock.set(gauge_count(snap.low_stock));
    }

    /// Encode every registered metric in text exposition format.
    pub fn render(&self) -> Result<String> {
        let families = self.registry.gather();
        let mut out = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut out)
            .map_err(map_prom)?;
        String::from_utf8(out).map_err(|e| InventoryError::Internal(format!("metrics utf8: {e}")))
    }
}

fn gauge_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
