use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::engine::convert_amount_to_words;
use crate::error::Result;
use crate::logging;
use crate::models::{ConvertRequest, ConvertResponse, HealthResponse, StatsResponse};
use crate::text_input::parse_amount;

/// Process-wide conversion counters.
///
/// The engine itself is pure; these atomics are the only shared mutable
/// state in the server. Relaxed ordering is enough for monotonic counters.
#[derive(Debug, Default)]
pub struct ConversionStats {
    total_conversions: AtomicU64,
    failed_conversions: AtomicU64,
}

impl ConversionStats {
    pub fn record_success(&self) {
        self.total_conversions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.total_conversions.fetch_add(1, Ordering::Relaxed);
        self.failed_conversions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.total_conversions.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed_conversions.load(Ordering::Relaxed)
    }
}

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<ConversionStats>,
    pub request_timeout: Duration,
}

// HTTP Handlers

/// Spell out a decimal amount sent as free text
async fn convert(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
    tracing::debug!("Convert request - input_len={}", req.amount.len());

    let outcome = parse_amount(&req.amount).and_then(|amount| convert_amount_to_words(&amount));

    match outcome {
        Ok(words) => {
            state.stats.record_success();
            Ok(Json(ConvertResponse {
                status: "success".to_string(),
                words,
            }))
        }
        Err(err) => {
            state.stats.record_failure();
            tracing::debug!("Conversion rejected: {}", err);
            Err(err)
        }
    }
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Conversion counters endpoint
async fn conversion_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_conversions: state.stats.total(),
        failed_conversions: state.stats.failed(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/convert", post(convert))
        .route("/health", get(health_check))
        .route("/stats", get(conversion_stats))
        .layer(middleware::from_fn(logging::access_log_middleware))
        .layer(middleware::from_fn(logging::request_id_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
        .layer(cors)
}
