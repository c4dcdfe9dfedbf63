//! Integration tests for the CRM tier endpoint.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_json, test_config, test_config_with_policy};
use domain::services::UnknownArtistPolicy;

#[tokio::test]
async fn test_tiers_for_known_campaign() {
    let app = create_test_app(test_config());

    let (status, json) = get_json(&app, "/api/tiers/camp1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["campaignId"], "camp1");
    assert_eq!(json["tiers"]["gold"]["count"], 1250);
    assert_eq!(json["tiers"]["gold"]["avgSpend"], 125);
    assert_eq!(
        json["tiers"]["bronze"]["criteria"],
        "Basic engagement + any purchase"
    );
    assert_eq!(json["totalAudience"], 13550);
}

#[tokio::test]
async fn test_tiers_for_any_id() {
    let app = create_test_app(test_config());

    let (status, json) = get_json(&app, "/api/tiers/anything123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["campaignId"], "anything123");
    assert_eq!(json["totalAudience"], 13550);
}

#[tokio::test]
async fn test_tiers_unaffected_by_reject_policy() {
    let app = create_test_app(test_config_with_policy(UnknownArtistPolicy::Reject));

    let (status, json) = get_json(&app, "/api/tiers/nope").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["campaignId"], "nope");
}

#[tokio::test]
async fn test_tiers_requires_campaign_id() {
    let app = create_test_app(test_config());

    let (status, json) = get_json(&app, "/api/tiers/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}
