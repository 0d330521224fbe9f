//! Weathercast HTTP Server
//!
//! Loads the historical observations, builds the forecast table and serves
//! the forecast page and lookup API.

use anyhow::Context;
use application::ForecastTableBuilder;
use infrastructure::{
    AppConfig, CsvHistoricalSource, LogFormat, init_logging, telemetry::DEFAULT_LOG_FILTER,
};
use presentation_http::{
    cors_layer, routes,
    server::serve_until,
    state::{AppState, ModelInfo},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing
    let log_format = config
        .server
        .log_format
        .parse::<LogFormat>()
        .unwrap_or_default();
    init_logging(log_format, DEFAULT_LOG_FILTER)?;

    info!("Weathercast v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        environment = %config.effective_environment(),
        host = %config.server.host,
        port = %config.server.port,
        data = %config.data.path.display(),
        "Configuration loaded"
    );

    // Build tables before binding; any failure aborts startup
    let builder = ForecastTableBuilder::default();
    let source = CsvHistoricalSource::new(config.data.path.clone());
    let (historical, forecast) = builder
        .prepare(&source)
        .context("failed to prepare forecast table")?;

    let model = ModelInfo {
        order: builder.order(),
        horizon: builder.horizon(),
    };
    let addr = config.server.bind_address();
    let shutdown_timeout = config.server.shutdown_timeout();
    let cors = cors_layer(&config.server);

    let state = AppState::new(historical, forecast, model, config)
        .context("failed to initialize templates")?;

    // Build router
    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());
    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let outcome = serve_until(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!(?outcome, "Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
