//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use inventory_core::error::{InventoryError, Result};

pub use schema::{ServiceConfig, ServiceSection};

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| InventoryError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like `load_from_file`, but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "no config file, using defaults");
            Ok(ServiceConfig::default())
        }
        Err(e) => Err(InventoryError::BadConfig(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| InventoryError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
