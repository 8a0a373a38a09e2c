//! In-process metrics for the inventory service.
//!
//! Metrics live in an owned `prometheus::Registry` held by `AppState` and are
//! rendered by the `/metrics` handler in text exposition format.
//!
//! - `metrics` : product request/inventory metrics and the registry
//! - `http`    : route-level middleware metrics

pub mod http;
pub mod metrics;

pub use http::{track_http, HttpMetrics};
pub use metrics::{Endpoint, InventoryMetrics, RequestScope};
