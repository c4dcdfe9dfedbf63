//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use domain::services::UnknownArtistPolicy;
use fixtures::datasets::{engagement_campaigns, sales_campaigns, sms_campaigns};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub unknown_artist_policy: UnknownArtistPolicy,
    pub datasets: DatasetHealth,
}

/// Row counts of the fixture datasets backing the endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatasetHealth {
    pub sales: usize,
    pub engagement: usize,
    pub sms: usize,
}

impl DatasetHealth {
    fn current() -> Self {
        Self {
            sales: sales_campaigns().len(),
            engagement: engagement_campaigns().len(),
            sms: sms_campaigns().len(),
        }
    }

    fn is_populated(&self) -> bool {
        self.sales > 0 && self.engagement > 0 && self.sms > 0
    }
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let datasets = DatasetHealth::current();

    Json(HealthResponse {
        status: if datasets.is_populated() {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        unknown_artist_policy: state.unknown_artist_policy(),
        datasets,
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// Returns 200 OK once every dataset has rows to serve.
pub async fn ready() -> Result<Json<StatusResponse>, StatusCode> {
    if DatasetHealth::current().is_populated() {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_populated() {
        let datasets = DatasetHealth::current();
        assert_eq!(datasets.sales, 3);
        assert_eq!(datasets.engagement, 3);
        assert_eq!(datasets.sms, 2);
        assert!(datasets.is_populated());
    }

    #[test]
    fn test_empty_dataset_not_populated() {
        let datasets = DatasetHealth {
            sales: 3,
            engagement: 0,
            sms: 2,
        };
        assert!(!datasets.is_populated());
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.3.0".to_string(),
            timestamp: Utc::now(),
            unknown_artist_policy: UnknownArtistPolicy::MatchNone,
            datasets: DatasetHealth::current(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["unknown_artist_policy"], "match_none");
        assert_eq!(json["datasets"]["sms"], 2);
    }

    #[tokio::test]
    async fn test_live_and_ready() {
        assert_eq!(live().await.0.status, "alive");
        assert_eq!(ready().await.unwrap().0.status, "ready");
    }
}
