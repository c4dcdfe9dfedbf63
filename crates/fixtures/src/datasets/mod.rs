//! Static datasets.

pub mod engagement;
pub mod sales;
pub mod sms;
pub mod tiers;

pub use engagement::engagement_campaigns;
pub use sales::sales_campaigns;
pub use sms::sms_campaigns;
pub use tiers::tier_breakdown;
