//! SMS campaign repository.

use domain::models::SmsCampaign;

use crate::datasets::sms_campaigns;
use crate::metrics::LookupTimer;

/// Repository for standalone SMS campaigns. The dataset is never filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsRepository;

impl SmsRepository {
    pub fn new() -> Self {
        Self
    }

    /// All SMS campaigns.
    pub fn list(&self) -> Vec<SmsCampaign> {
        let timer = LookupTimer::new("sms");
        let campaigns = sms_campaigns();
        timer.finish(campaigns.len());
        campaigns
    }
}
