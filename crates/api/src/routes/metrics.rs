//! Campaign and social metrics endpoints.
//!
//! Every handler is a read over the fixture repositories. Unknown identifiers follow
//! the configured [`UnknownArtistPolicy`]; malformed query values are only rejected
//! when that policy is `reject`. Repeated query keys resolve to their first value.

use axum::{extract::State, Json};
use domain::models::{
    ArtistRef, CampaignList, EngagementCampaign, EngagementQuery, SalesCampaign, SalesQuery,
    SmsCampaign, SocialQuery, SocialSnapshot,
};
use domain::services::{CampaignFilter, FilterError, UnknownArtistPolicy};
use fixtures::repositories::{
    EngagementRepository, SalesRepository, SmsRepository, SocialRepository,
};
use tracing::{debug, info};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::FirstValueQuery;
use crate::middleware::metrics::{record_campaigns_served, record_rejected_query};

/// Validates `query`, failing only when the configuration enforces validation.
fn check_query<Q: Validate>(
    state: &AppState,
    endpoint: &'static str,
    query: &Q,
) -> Result<(), ApiError> {
    match query.validate() {
        Ok(()) => Ok(()),
        Err(errors) if state.config.filters.enforces_validation() => {
            record_rejected_query(endpoint);
            Err(errors.into())
        }
        Err(errors) => {
            debug!(endpoint, %errors, "Accepting malformed query");
            Ok(())
        }
    }
}

fn rejected(endpoint: &'static str) -> impl FnOnce(FilterError) -> ApiError {
    move |err| {
        record_rejected_query(endpoint);
        ApiError::from(err)
    }
}

/// GET /api/metrics/sales
///
/// Sales campaigns narrowed by `artist` and `campaign` (both default `all`).
pub async fn get_sales_metrics(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<SalesQuery>,
) -> Result<Json<CampaignList<SalesCampaign>>, ApiError> {
    check_query(&state, "sales", &query)?;

    let filter = CampaignFilter::new(query.artist(), query.campaign());
    let campaigns = SalesRepository::new(state.unknown_artist_policy())
        .find(&filter)
        .map_err(rejected("sales"))?;

    info!(
        artist = %filter.artist,
        campaign = %filter.campaign,
        count = campaigns.len(),
        "Served sales metrics"
    );
    record_campaigns_served("sales", campaigns.len());

    Ok(Json(CampaignList::new(campaigns)))
}

/// GET /api/metrics/email
///
/// Engagement campaigns (email, SMS and CRM tiers) narrowed by `artist`.
pub async fn get_email_metrics(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<EngagementQuery>,
) -> Result<Json<CampaignList<EngagementCampaign>>, ApiError> {
    check_query(&state, "email", &query)?;

    let artist = query.artist();
    let campaigns = EngagementRepository::new(state.unknown_artist_policy())
        .find_by_artist(&artist)
        .map_err(rejected("email"))?;

    info!(artist = %artist, count = campaigns.len(), "Served email metrics");
    record_campaigns_served("email", campaigns.len());

    Ok(Json(CampaignList::new(campaigns)))
}

/// GET /api/metrics/sms
///
/// The standalone SMS dataset. Accepts no filters.
pub async fn get_sms_metrics() -> Json<CampaignList<SmsCampaign>> {
    let campaigns = SmsRepository::new().list();

    info!(count = campaigns.len(), "Served SMS metrics");
    record_campaigns_served("sms", campaigns.len());

    Json(CampaignList::new(campaigns))
}

/// GET /api/metrics/social
///
/// A freshly generated snapshot for `artist` (default `artist1`) over `days`
/// (`7` for a week, anything else for the full window). Two identical requests
/// return different numbers.
pub async fn get_social_metrics(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<SocialQuery>,
) -> Result<Json<SocialSnapshot>, ApiError> {
    check_query(&state, "social", &query)?;

    let artist = query.artist();
    if let ArtistRef::Unknown(raw) = &artist {
        if state.unknown_artist_policy() == UnknownArtistPolicy::Reject {
            return Err(rejected("social")(FilterError::UnknownArtist(raw.clone())));
        }
    }

    let window = query.window();
    let snapshot = SocialRepository::new().snapshot(&artist, window);

    info!(
        artist = %artist,
        days = window.as_days(),
        followers = snapshot.platforms.total_followers(),
        "Served social metrics"
    );

    Ok(Json(snapshot))
}
