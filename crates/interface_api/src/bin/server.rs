//! Claims Triage - API Server Binary
//!
//! This binary starts the HTTP API server for claim document triage.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-triage-api
//!
//! # Run with environment variables
//! API_PORT=8080 API_LOG_FORMAT=json API_RULES_PATH=rules.json cargo run --bin claims-triage-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 5000)
//! * `API_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `API_MAX_UPLOAD_BYTES` - Largest accepted document (default: 10 MiB)
//! * `API_MAX_TEXT_CHARS` - Text budget handed to the extractor (default: 15000)
//! * `API_RULES_PATH` - JSON file overriding the triage rule table

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_intake::{IntakeService, LabelFieldExtractor, PlainTextReader};
use domain_triage::{TriageEngine, TriageRules};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::create_router;

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The rule file cannot be read or is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        max_upload_bytes = config.max_upload_bytes,
        "Starting Claims Triage API Server"
    );

    let engine = build_engine(config.rules_path.as_deref())?;
    let intake = IntakeService::new(
        Arc::new(PlainTextReader::new(config.max_text_chars)),
        Arc::new(LabelFieldExtractor::new()),
        Arc::new(engine),
    )
    .with_max_document_bytes(config.max_upload_bytes);

    let app = create_router(intake, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Builds the triage engine, loading the rule table from disk when configured
fn build_engine(rules_path: Option<&str>) -> anyhow::Result<TriageEngine> {
    let Some(path) = rules_path else {
        tracing::info!("Using built-in triage rules");
        return Ok(TriageEngine::default());
    };

    let rules = TriageRules::from_file(Path::new(path))
        .with_context(|| format!("failed to load triage rules from {path}"))?;

    tracing::info!(
        path,
        fraud_keywords = rules.fraud_keywords().len(),
        injury_keywords = rules.injury_keywords().len(),
        threshold = %rules.fast_track_threshold(),
        "Loaded triage rules"
    );

    Ok(TriageEngine::new(rules))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
