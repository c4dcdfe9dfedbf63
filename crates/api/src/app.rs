use axum::{middleware, routing::get, Router};
use domain::services::UnknownArtistPolicy;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{health, metrics, not_found, tiers};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn unknown_artist_policy(&self) -> UnknownArtistPolicy {
        self.config.filters.unknown_artist
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // Development default: any origin
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_app(config: Config) -> Router {
    let config = Arc::new(config);
    let cors = cors_layer(&config.security.cors_origins);
    let timeout = Duration::from_secs(config.server.request_timeout_secs);

    let state = AppState { config };

    let metrics_routes = Router::new()
        .route("/api/metrics/sales", get(metrics::get_sales_metrics))
        .route("/api/metrics/email", get(metrics::get_email_metrics))
        .route("/api/metrics/sms", get(metrics::get_sms_metrics))
        .route("/api/metrics/social", get(metrics::get_social_metrics))
        .route("/api/tiers/:campaign_id", get(tiers::get_campaign_tiers));

    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(metrics_routes)
        .merge(ops_routes)
        .fallback(not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
