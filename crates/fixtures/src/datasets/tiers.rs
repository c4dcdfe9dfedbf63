//! CRM tier dataset. Not keyed by campaign: every campaign reports the same tiers.

use domain::models::{TierBreakdown, TierDetail};

pub fn tier_breakdown() -> TierBreakdown {
    TierBreakdown {
        gold: TierDetail {
            count: 1250,
            criteria: "High engagement + purchases > $500".to_string(),
            avg_spend: 125,
        },
        silver: TierDetail {
            count: 3400,
            criteria: "Medium engagement + purchases > $100".to_string(),
            avg_spend: 65,
        },
        bronze: TierDetail {
            count: 8900,
            criteria: "Basic engagement + any purchase".to_string(),
            avg_spend: 25,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_audience() {
        assert_eq!(tier_breakdown().counts().total(), 13550);
    }
}
