//! Top-level facade crate for the inventory service.
//!
//! Re-exports the domain types and the HTTP service so users can depend on a single crate.

pub mod core {
    pub use inventory_core::*;
}

pub mod service {
    pub use inventory_service::*;
}
