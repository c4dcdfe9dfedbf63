//! Domain models for the Talent Portal.

pub mod artist;
pub mod campaign;
pub mod query;
pub mod social;
pub mod tiers;

pub use artist::{Artist, ArtistRef, WILDCARD};
pub use campaign::{
    ArtistScoped, CampaignList, CampaignSelector, CampaignStatus, CrmTiers, EmailMetrics,
    EngagementCampaign, RevenueBreakdown, RevenueSource, SalesCampaign, SalesMetrics,
    SmsCampaign, SmsMetrics,
};
pub use query::{EngagementQuery, SalesQuery, SocialQuery};
pub use social::{
    DayWindow, PaidAdStats, Platform, PlatformStats, PlatformSnapshot, SocialSnapshot, TopContent,
};
pub use tiers::{Tier, TierBreakdown, TierDetail, TierReport};
