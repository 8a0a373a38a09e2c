//! Product handlers.
//!
//! Every handler runs its body through `instrumented`, which counts the
//! request on entry, times the whole body, and counts 4xx outcomes. Bodies are
//! taken as raw bytes so payload validation, not an extractor rejection,
//! decides which 400 message the client sees. Extractor rejections are
//! taken as values and mapped inside the instrumented scope so they are
//! counted and rendered like any other client error.

use std::future::Future;

use axum::{
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use inventory_core::error::{InventoryError, Result};
use inventory_core::{Product, ProductPayload};

use crate::api::{ApiError, ApiResult};
use crate::app_state::AppState;
use crate::obs::Endpoint;

async fn instrumented<T, F>(state: &AppState, ep: Endpoint, body: F) -> ApiResult<T>
where
    F: Future<Output = Result<T>>,
{
    let metrics = state.metrics();
    let _scope = metrics.begin_request(ep);

    body.await.map_err(|e| {
        if e.is_client_error() {
            metrics.record_error(ep);
            tracing::debug!(
                method = ep.method(),
                endpoint = ep.template(),
                error = %e,
                "request rejected"
            );
        } else {
            tracing::error!(
                method = ep.method(),
                endpoint = ep.template(),
                error = %e,
                "request failed"
            );
        }
        ApiError(e)
    })
}

/// An id that cannot be decoded cannot name a stored product.
fn product_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, "undecodable product id");
        InventoryError::NotFound
    })
}

fn body_bytes(body: std::result::Result<Bytes, BytesRejection>) -> Result<Bytes> {
    body.map_err(|e| InventoryError::MalformedJson(format!("read body: {e}")))
}

pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    instrumented(&state, Endpoint::ListProducts, async {
        Ok(Json(state.inventory().list().await))
    })
    .await
}

pub async fn get_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    instrumented(&state, Endpoint::GetProduct, async {
        let id = product_id(path)?;
        state.inventory().get(&id).await.map(Json)
    })
    .await
}

pub async fn create_product(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    instrumented(&state, Endpoint::CreateProduct, async {
        let payload = ProductPayload::from_slice(&body_bytes(body)?)?;
        let product = state.inventory().create(payload).await;
        Ok((StatusCode::CREATED, Json(product)))
    })
    .await
}

pub async fn replace_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Product>> {
    instrumented(&state, Endpoint::ReplaceProduct, async {
        let id = product_id(path)?;
        let inventory = state.inventory();
        // Unknown id is reported before the body is looked at.
        if !inventory.contains(&id).await {
            return Err(InventoryError::NotFound);
        }
        let payload = ProductPayload::from_slice(&body_bytes(body)?)?;
        inventory.replace(&id, payload).await.map(Json)
    })
    .await
}

pub async fn delete_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Value>> {
    instrumented(&state, Endpoint::DeleteProduct, async {
        let id = product_id(path)?;
        state.inventory().delete(&id).await?;
        Ok(Json(json!({})))
    })
    .await
}
