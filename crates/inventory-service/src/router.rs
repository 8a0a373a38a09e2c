//! Axum router wiring.
//!
//! Product CRUD lives under `/inventory/products`; operational endpoints sit
//! at the root. Request bodies are not size-capped.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};

use crate::{api::products, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/inventory/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/inventory/products/:id",
            get(products::get_product)
                .put(products::replace_product)
                .delete(products::delete_product),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_http))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
