use std::net::SocketAddr;

use serde::Deserialize;
use inventory_core::error::{InventoryError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            service: ServiceSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(InventoryError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.service.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            InventoryError::BadConfig(format!(
                "service.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
