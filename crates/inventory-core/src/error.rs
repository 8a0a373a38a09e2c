//! Shared error type across inventory crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested product id is not in the registry.
    NotFound,
    /// Body is missing or is not valid JSON.
    InvalidJson,
    /// Body is JSON but does not describe a product.
    InvalidProduct,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation, handy for logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidJson => "INVALID_JSON",
            ClientCode::InvalidProduct => "INVALID_PRODUCT",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code as a bare integer (core carries no HTTP dependency).
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::NotFound => 404,
            ClientCode::InvalidJson | ClientCode::InvalidProduct => 400,
            ClientCode::Internal => 500,
        }
    }

    /// Fixed `message` field rendered in the JSON error body.
    pub fn message(self) -> &'static str {
        match self {
            ClientCode::NotFound => "Product not found",
            ClientCode::InvalidJson => "Invalid JSON data",
            ClientCode::InvalidProduct => "Invalid product data",
            ClientCode::Internal => "Internal server error",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("product not found")]
    NotFound,
    #[error("malformed json: {0}")]
    MalformedJson(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            InventoryError::NotFound => ClientCode::NotFound,
            InventoryError::MalformedJson(_) => ClientCode::InvalidJson,
            InventoryError::MissingField(_) | InventoryError::InvalidField { .. } => {
                ClientCode::InvalidProduct
            }
            InventoryError::BadConfig(_) | InventoryError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for the 4xx outcomes (not-found or malformed input).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.client_code().http_status())
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        InventoryError::InvalidField { field, reason: reason.into() }
    }
}
