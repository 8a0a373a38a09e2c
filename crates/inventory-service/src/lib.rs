//! Inventory service library entry.
//!
//! This crate wires the product registry, the metrics recorder, and the HTTP
//! API into a single axum application. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod inventory;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
