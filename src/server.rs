//! HTTP server initialization and runtime setup.
//!
//! Wires repositories into state, binds the listener and runs Axum until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::{InMemoryPaymentRepository, InMemoryTheaterRepository};
use crate::routes::{payment_router, theaters_router};
use crate::state::{PaymentState, TheatersState};

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `log_level` accepts any `EnvFilter` directive string and falls back to
/// `info` when it cannot be parsed. `log_format` selects `json` or plain text.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs the payment service.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_payment(config: &Config) -> Result<()> {
    let repository = Arc::new(InMemoryPaymentRepository::new());
    tracing::info!("Payment store ready (in-memory)");

    let state = PaymentState::new(repository, config.store_timeout());

    serve("payment", &config.payment_listen, payment_router(state)).await
}

/// Runs the theaters service.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded, the listener cannot
/// bind, or the server fails.
pub async fn run_theaters(config: &Config) -> Result<()> {
    let repository = match &config.catalog_path {
        Some(path) => InMemoryTheaterRepository::load(path)
            .await
            .context("Failed to load catalog")?,
        None => {
            tracing::warn!("CATALOG_PATH not set, serving an empty catalog");
            InMemoryTheaterRepository::new()
        }
    };

    let state = TheatersState::new(Arc::new(repository), config.store_timeout());

    serve("theaters", &config.theaters_listen, theaters_router(state)).await
}

async fn serve(service: &str, addr: &str, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    tracing::info!(service, "Listening on http://{local}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(service, "Server stopped");
    Ok(())
}

/// Completes on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
