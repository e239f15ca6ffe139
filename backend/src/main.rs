//! Nutriplan Backend
//!
//! HTTP front end for the nutrition and biometric calculator.
//!
//! - Routes: request parsing and response shapes
//! - Services: validation and calls into `nutriplan-shared`
//! - Repositories: per-user water intake and calendar note history

use anyhow::Result;
use nutriplan_backend::{config::AppConfig, routes, state::AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::load()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %AppConfig::environment(),
        max_note_length = config.history.max_note_length,
        max_query_days = config.history.max_query_days,
        "Starting Nutriplan Backend"
    );
    if AppConfig::is_production() && config.server.host == "127.0.0.1" {
        warn!("Server is bound to loopback in production");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::create_router(AppState::in_memory(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins; otherwise debug in development and info in production.
/// Production logs are JSON lines.
fn init_tracing() {
    let production = AppConfig::is_production();
    let default_filter = if production {
        "nutriplan_backend=info,tower_http=info"
    } else {
        "nutriplan_backend=debug,tower_http=debug"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
