//! Repository implementations over the fixture datasets.

pub mod engagement;
pub mod sales;
pub mod sms;
pub mod social;
pub mod tiers;

pub use engagement::EngagementRepository;
pub use sales::SalesRepository;
pub use sms::SmsRepository;
pub use social::SocialRepository;
pub use tiers::TierRepository;
