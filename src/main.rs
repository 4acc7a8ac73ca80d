//! Enviro Governance - HTTP service entry point
//!
//! Loads configuration, initializes tracing, builds the strategy catalog and
//! serves the REST API until interrupted.

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enviro_governance::adapters::http::{app_router, AppServices};
use enviro_governance::config::{AppConfig, ServerConfig};
use enviro_governance::domain::remediation::{ContaminationAnalyzer, StrategyRanker};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let catalog = match config.remediation.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Strategy catalog could not be loaded: {}", e);
            std::process::exit(1);
        }
    };

    info!("======================================");
    info!("  Enviro Governance v{}", env!("CARGO_PKG_VERSION"));
    info!("======================================");
    info!("Environment: {:?}", config.server.environment);
    info!(
        "Catalog: {} ({} strategies)",
        config.remediation.catalog_path.as_deref().unwrap_or("built-in"),
        catalog.entries().len()
    );
    info!("Request timeout: {}s", config.server.request_timeout_secs);

    let services = AppServices::new(
        config.limits.clone(),
        StrategyRanker::new(catalog),
        ContaminationAnalyzer::default(),
    );
    let app = app_router(services, &config.server);

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown complete");
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
