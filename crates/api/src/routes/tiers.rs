//! CRM tier endpoint.

use axum::{extract::Path, Json};
use domain::models::TierReport;
use fixtures::repositories::TierRepository;
use tracing::info;

/// GET /api/tiers/:campaign_id
///
/// Tier breakdown for a campaign. The id is echoed back but does not select the data,
/// so unknown ids get the same report as known ones.
pub async fn get_campaign_tiers(Path(campaign_id): Path<String>) -> Json<TierReport> {
    let report = TierRepository::new().report_for(&campaign_id);

    info!(
        campaign_id = %report.campaign_id,
        total_audience = report.total_audience,
        "Served tier report"
    );

    Json(report)
}
