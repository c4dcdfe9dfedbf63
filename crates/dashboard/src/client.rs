//! Access to the metrics endpoints.

use async_trait::async_trait;
use domain::models::{
    ArtistRef, CampaignList, CampaignSelector, DayWindow, EngagementCampaign, SalesCampaign,
    SmsCampaign, SocialSnapshot, TierReport,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from fetching metrics.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Metrics service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response from metrics service: {0}")]
    InvalidResponse(String),
}

/// Source of dashboard data.
///
/// Implemented over HTTP for the real dashboard and in-process for tests.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn sales(
        &self,
        artist: &ArtistRef,
        campaign: &CampaignSelector,
    ) -> Result<Vec<SalesCampaign>, ClientError>;

    async fn email(&self, artist: &ArtistRef) -> Result<Vec<EngagementCampaign>, ClientError>;

    async fn sms(&self) -> Result<Vec<SmsCampaign>, ClientError>;

    async fn social(
        &self,
        artist: &ArtistRef,
        window: DayWindow,
    ) -> Result<SocialSnapshot, ClientError>;

    async fn tiers(&self, campaign_id: &str) -> Result<TierReport, ClientError>;
}

/// [`MetricsSource`] backed by a running API server.
#[derive(Debug, Clone)]
pub struct HttpMetricsSource {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpMetricsSource {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Full URL for `path` with the given query pairs.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// URL of the tier report for `campaign_id`, with the id as one path segment.
    pub fn tier_url(&self, campaign_id: &str) -> Result<Url, ClientError> {
        let mut url = self.url("/api/tiers", &[])?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .push(campaign_id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(url = %url, "Fetching metrics");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout.as_millis() as u64)
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn sales(
        &self,
        artist: &ArtistRef,
        campaign: &CampaignSelector,
    ) -> Result<Vec<SalesCampaign>, ClientError> {
        let url = self.url(
            "/api/metrics/sales",
            &[("artist", artist.as_id()), ("campaign", campaign.as_id())],
        )?;
        let list: CampaignList<SalesCampaign> = self.get_json(url).await?;
        Ok(list.campaigns)
    }

    async fn email(&self, artist: &ArtistRef) -> Result<Vec<EngagementCampaign>, ClientError> {
        let url = self.url("/api/metrics/email", &[("artist", artist.as_id())])?;
        let list: CampaignList<EngagementCampaign> = self.get_json(url).await?;
        Ok(list.campaigns)
    }

    async fn sms(&self) -> Result<Vec<SmsCampaign>, ClientError> {
        let url = self.url("/api/metrics/sms", &[])?;
        let list: CampaignList<SmsCampaign> = self.get_json(url).await?;
        Ok(list.campaigns)
    }

    async fn social(
        &self,
        artist: &ArtistRef,
        window: DayWindow,
    ) -> Result<SocialSnapshot, ClientError> {
        let url = self.url(
            "/api/metrics/social",
            &[("artist", artist.as_id()), ("days", window.as_days())],
        )?;
        self.get_json(url).await
    }

    async fn tiers(&self, campaign_id: &str) -> Result<TierReport, ClientError> {
        let url = self.tier_url(campaign_id)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Artist;

    fn source() -> HttpMetricsSource {
        HttpMetricsSource::new("http://localhost:8080", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpMetricsSource::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = HttpMetricsSource::new("mailto:ops@example.com", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_sales_url() {
        let artist: ArtistRef = Artist::EchoRivers.into();
        let url = source()
            .url(
                "/api/metrics/sales",
                &[("artist", artist.as_id()), ("campaign", CampaignSelector::All.as_id())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/metrics/sales?artist=artist2&campaign=all"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let url = source()
            .url("/api/metrics/email", &[("artist", "a b&c")])
            .unwrap();
        assert_eq!(url.query(), Some("artist=a+b%26c"));
    }

    #[test]
    fn test_tier_url_encodes_campaign_id() {
        let url = source().tier_url("camp 1/x").unwrap();
        assert_eq!(url.path(), "/api/tiers/camp%201%2Fx");
    }

    #[test]
    fn test_url_without_query() {
        let url = source().url("/api/metrics/sms", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/metrics/sms");
    }
}
