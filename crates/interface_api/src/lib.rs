//! HTTP API Layer
//!
//! This crate provides the REST API for claim triage using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Document upload, structured evaluation, health
//! - **Middleware**: Request logging, request ids, tracing
//! - **DTOs**: Response payloads
//! - **Error Handling**: Consistent `{error, message}` error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(IntakeService::default(), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_intake::IntakeService;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::request_log_middleware;

/// Headroom for multipart boundaries and part headers on top of the document limit
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<IntakeService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `intake` - Intake pipeline used by the claim handlers
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(intake: IntakeService, config: ApiConfig) -> Router {
    let body_limit = config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    let state = AppState {
        intake: Arc::new(intake),
        config,
    };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/upload", post(claims::upload_claim))
        .route("/evaluate", post(claims::evaluate_claim))
        .layer(DefaultBodyLimit::max(body_limit));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    let request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
