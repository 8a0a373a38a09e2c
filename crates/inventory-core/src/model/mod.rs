//! Product domain model.
//!
//! - `product` : the stored record and derived inventory snapshot
//! - `payload` : request body validation (JSON -> typed fields)

pub mod payload;
pub mod product;

pub use payload::ProductPayload;
pub use product::{InventorySnapshot, Product, LOW_STOCK_THRESHOLD};
