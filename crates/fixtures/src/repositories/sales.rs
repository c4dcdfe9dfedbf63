//! Sales campaign repository.

use domain::models::SalesCampaign;
use domain::services::{filter_campaigns, CampaignFilter, FilterError, UnknownArtistPolicy};

use crate::datasets::sales_campaigns;
use crate::metrics::LookupTimer;

/// Repository for sales campaign lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesRepository {
    policy: UnknownArtistPolicy,
}

impl SalesRepository {
    /// Create a new repository instance.
    pub fn new(policy: UnknownArtistPolicy) -> Self {
        Self { policy }
    }

    /// Find campaigns matching the artist and campaign selectors.
    pub fn find(&self, filter: &CampaignFilter) -> Result<Vec<SalesCampaign>, FilterError> {
        let timer = LookupTimer::new("sales");
        let campaigns = if filter.is_identity() {
            sales_campaigns()
        } else {
            filter_campaigns(&sales_campaigns(), filter, self.policy)?
        };
        timer.finish(campaigns.len());
        Ok(campaigns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{Artist, ArtistRef, CampaignSelector};
    use domain::services::summarize_sales;

    #[test]
    fn test_find_all_is_full_dataset() {
        let repo = SalesRepository::default();
        let all = repo.find(&CampaignFilter::default()).unwrap();
        assert_eq!(all, sales_campaigns());
    }

    #[test]
    fn test_identity_filter_ignores_policy() {
        let filter = CampaignFilter::new(ArtistRef::All, CampaignSelector::All);
        assert!(filter.is_identity());
        for policy in [UnknownArtistPolicy::MatchNone, UnknownArtistPolicy::Reject] {
            let found = SalesRepository::new(policy).find(&filter).unwrap();
            assert_eq!(found.len(), 3);
            assert_eq!(found[0].id, "sales1");
        }
    }

    #[test]
    fn test_luna_and_neon_total_revenue() {
        let repo = SalesRepository::default();
        let mut campaigns = repo
            .find(&CampaignFilter::for_artist(Artist::LunaMartinez.into()))
            .unwrap();
        campaigns.extend(
            repo.find(&CampaignFilter::for_artist(Artist::NeonDreams.into()))
                .unwrap(),
        );
        let summary = summarize_sales(&campaigns);
        assert_eq!(summary.campaign_count, 2);
        assert_eq!(summary.total_revenue, 77350);
        assert_eq!(summary.breakdown.total(), 77350);
    }

    #[test]
    fn test_find_by_campaign() {
        let repo = SalesRepository::default();
        let found = repo
            .find(&CampaignFilter::new(
                ArtistRef::All,
                CampaignSelector::Id("sales2".into()),
            ))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].artist, "Echo Rivers");
    }

    #[test]
    fn test_policy_is_applied() {
        let filter = CampaignFilter::for_artist(ArtistRef::parse("artist7"));
        assert_eq!(SalesRepository::default().find(&filter).unwrap().len(), 3);
        assert!(SalesRepository::new(UnknownArtistPolicy::MatchNone)
            .find(&filter)
            .unwrap()
            .is_empty());
        assert!(SalesRepository::new(UnknownArtistPolicy::Reject)
            .find(&filter)
            .is_err());
    }
}
