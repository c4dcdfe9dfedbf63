//! Engagement campaign repository (email, SMS and CRM tiers).

use domain::models::{ArtistRef, EngagementCampaign};
use domain::services::{filter_campaigns, CampaignFilter, FilterError, UnknownArtistPolicy};

use crate::datasets::engagement_campaigns;
use crate::metrics::LookupTimer;

/// Repository for engagement campaign lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementRepository {
    policy: UnknownArtistPolicy,
}

impl EngagementRepository {
    /// Create a new repository instance.
    pub fn new(policy: UnknownArtistPolicy) -> Self {
        Self { policy }
    }

    /// Find campaigns for an artist.
    pub fn find_by_artist(
        &self,
        artist: &ArtistRef,
    ) -> Result<Vec<EngagementCampaign>, FilterError> {
        let timer = LookupTimer::new("email");
        let filter = CampaignFilter::for_artist(artist.clone());
        let campaigns = filter_campaigns(&engagement_campaigns(), &filter, self.policy)?;
        timer.finish(campaigns.len());
        Ok(campaigns)
    }
}
