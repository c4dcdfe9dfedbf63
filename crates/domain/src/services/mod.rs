//! Domain services for the Talent Portal.
//!
//! Services contain business logic that operates on domain models.

pub mod aggregation;
pub mod campaign_filter;
pub mod selection;
pub mod social_snapshot;

pub use aggregation::{
    summarize_engagement, summarize_sales, BreakdownShare, CampaignAudience, EngagementSummary,
    SalesSummary,
};
pub use campaign_filter::{
    campaigns_for_artist, filter_campaigns, CampaignFilter, FilterError, UnknownArtistPolicy,
};
pub use selection::is_consistent_selection;
pub use social_snapshot::{
    baseline_followers, generate_snapshot, FixedJitter, JitterSource, RngJitter,
};
