//! CRM tier breakdown reported per campaign.

use serde::{Deserialize, Serialize};

use super::campaign::CrmTiers;

/// A CRM audience segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Gold, Tier::Silver, Tier::Bronze];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Bronze => "Bronze",
        }
    }
}

/// Size and qualification rule of a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDetail {
    pub count: u64,
    pub criteria: String,
    pub avg_spend: u64,
}

/// All three tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub gold: TierDetail,
    pub silver: TierDetail,
    pub bronze: TierDetail,
}

impl TierBreakdown {
    pub fn get(&self, tier: Tier) -> &TierDetail {
        match tier {
            Tier::Gold => &self.gold,
            Tier::Silver => &self.silver,
            Tier::Bronze => &self.bronze,
        }
    }

    /// Bare counts, for use with the engagement aggregators.
    pub fn counts(&self) -> CrmTiers {
        CrmTiers {
            gold: self.gold.count,
            silver: self.silver.count,
            bronze: self.bronze.count,
        }
    }
}

/// Response of `GET /api/tiers/{campaignId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierReport {
    /// Echoed back exactly as supplied.
    pub campaign_id: String,
    pub tiers: TierBreakdown,
    pub total_audience: u64,
}

impl TierReport {
    /// Builds a report; `total_audience` is always derived from the tier counts.
    pub fn new(campaign_id: impl Into<String>, tiers: TierBreakdown) -> Self {
        let total_audience = tiers.counts().total();
        Self {
            campaign_id: campaign_id.into(),
            tiers,
            total_audience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(count: u64) -> TierDetail {
        TierDetail {
            count,
            criteria: "test".into(),
            avg_spend: 10,
        }
    }

    #[test]
    fn test_tier_report_derives_total() {
        let report = TierReport::new(
            "camp1",
            TierBreakdown {
                gold: detail(1),
                silver: detail(2),
                bronze: detail(3),
            },
        );
        assert_eq!(report.total_audience, 6);
        assert_eq!(report.campaign_id, "camp1");
    }

    #[test]
    fn test_tier_report_wire_format() {
        let report = TierReport::new(
            "x",
            TierBreakdown {
                gold: detail(5),
                silver: detail(0),
                bronze: detail(0),
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["campaignId"], "x");
        assert_eq!(json["totalAudience"], 5);
        assert_eq!(json["tiers"]["gold"]["avgSpend"], 10);
    }

    #[test]
    fn test_tier_lookup() {
        let breakdown = TierBreakdown {
            gold: detail(7),
            silver: detail(8),
            bronze: detail(9),
        };
        let counts: Vec<u64> = Tier::ALL.iter().map(|t| breakdown.get(*t).count).collect();
        assert_eq!(counts, vec![7, 8, 9]);
        assert_eq!(Tier::Silver.display_name(), "Silver");
    }
}
