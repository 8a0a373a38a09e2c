//! Route-level HTTP metrics, recorded by middleware for every matched route.
//!
//! These sit beside the product metrics: they see the final status code of
//! every response, including the operational endpoints. The `path` label is
//! the matched route template (`/inventory/products/:id`), never the raw URI.
//! The scrape endpoint itself is not tracked.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry};

use inventory_core::error::Result;

use super::metrics::map_prom;
use crate::app_state::AppState;

const PREFIX: &str = "inventory";
const SCRAPE_PATH: &str = "/metrics";

pub struct HttpMetrics {
    pub request_duration: HistogramVec,
    pub requests: IntCounterVec,
    pub exceptions: IntCounterVec,
    pub exporter_info: IntGaugeVec,
}

impl HttpMetrics {
    pub fn register(registry: &Registry) -> Result<Self> {
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                format!("{PREFIX}_http_request_duration_seconds"),
                "HTTP request duration in seconds",
            ),
            &["method", "path", "status"],
        )
        .map_err(map_prom)?;
        let requests = IntCounterVec::new(
            Opts::new(format!("{PREFIX}_http_request_total"), "Total number of HTTP requests"),
            &["method", "status"],
        )
        .map_err(map_prom)?;
        let exceptions = IntCounterVec::new(
            Opts::new(
                format!("{PREFIX}_http_request_exceptions_total"),
                "Total number of HTTP requests that ended in a server error",
            ),
            &["method", "status"],
        )
        .map_err(map_prom)?;
        let exporter_info = IntGaugeVec::new(
            Opts::new(format!("{PREFIX}_exporter_info"), "Information about the metrics exporter"),
            &["version"],
        )
        .map_err(map_prom)?;
        exporter_info
            .with_label_values(&[env!("CARGO_PKG_VERSION")])
            .set(1);

        registry.register(Box::new(request_duration.clone())).map_err(map_prom)?;
        registry.register(Box::new(requests.clone())).map_err(map_prom)?;
        registry.register(Box::new(exceptions.clone())).map_err(map_prom)?;
        registry.register(Box::new(exporter_info.clone())).map_err(map_prom)?;

        Ok(Self {
            request_duration,
            requests,
            exceptions,
            exporter_info,
        })
    }

    pub fn observe(&self, method: &str, path: &str, status: u16, elapsed_secs: f64) {
        let status = status.to_string();
        self.request_duration
            .with_label_values(&[method, path, &status])
            .observe(elapsed_secs);
        self.requests.with_label_values(&[method, &status]).inc();
        if status.starts_with('5') {
            self.exceptions.with_label_values(&[method, &status]).inc();
        }
    }
}

/// `route_layer` middleware: times the inner service and records the outcome.
pub async fn track_http(
    State(state): State<AppState>,
    matched: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = match &matched {
        Some(p) if p.as_str() == SCRAPE_PATH => return next.run(req).await,
        Some(p) => p.as_str().to_owned(),
        None => "unmatched".to_owned(),
    };
    let method = req.method().as_str().to_owned();

    let start = Instant::now();
    let resp = next.run(req).await;
    state.metrics().http.observe(
        &method,
        &path,
        resp.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    resp
}
