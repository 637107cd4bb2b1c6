//! # Roster Server
//!
//! Main entry point for the Roster application: a user-records CRUD service
//! backed by PostgreSQL with a Redis read-through cache.

use roster_config::ConfigLoader;
use roster_core::RosterResult;
use roster_rest::{create_router, AppState};
use tokio::signal;
use tracing::{error, info};

pub mod di;
mod startup;

use di::{build_module, ServiceResolver};

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting Roster server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Build DI module - centralized dependency injection
    let module = build_module(&config.database, &config.redis).await?;

    // Ensure the schema exists before serving traffic
    module.database_pool().run_migrations().await?;

    // Create application state by resolving services from the module
    let state = AppState::from_module(module.as_ref());

    // Create the router
    let router = create_router(state, &config.server);

    // Start the HTTP server
    let addr = config.server.addr();
    info!("Starting HTTP server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| roster_core::RosterError::Internal(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| roster_core::RosterError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
