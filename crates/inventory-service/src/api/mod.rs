//! Product REST API.
//!
//! - `GET    /inventory/products`      : list
//! - `POST   /inventory/products`      : create (201)
//! - `GET    /inventory/products/:id`  : fetch
//! - `PUT    /inventory/products/:id`  : full replace
//! - `DELETE /inventory/products/:id`  : remove

pub mod error;
pub mod products;

pub use error::{ApiError, ApiResult};
