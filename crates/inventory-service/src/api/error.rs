//! HTTP rendering of `InventoryError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use inventory_core::error::InventoryError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Newtype so the core error can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub InventoryError);

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "message": code.message() }))).into_response()
    }
}
