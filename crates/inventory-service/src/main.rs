//! Inventory service binary.
//!
//! - Product CRUD: /inventory/products[/:id]
//! - Prometheus scrape: /metrics
//! - Graceful shutdown on Ctrl-C / SIGTERM (readyz flips to 503 first)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_core::error::{InventoryError, Result};
use inventory_service::{app_state::AppState, config, router};

const CONFIG_ENV: &str = "INVENTORY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "inventory.yaml";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "inventory-service exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.service.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "inventory-service starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| InventoryError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| InventoryError::Internal(format!("server failed: {e}")))?;

    tracing::info!("inventory-service stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
