//! Inventory core: the product record, request payload validation, and the
//! error surface shared by the HTTP service and tests.
//!
//! This crate carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `InventoryError`/`Result` so malformed
//! request bodies never crash the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{ClientCode, InventoryError, Result};
pub use model::{InventorySnapshot, Product, ProductPayload};
