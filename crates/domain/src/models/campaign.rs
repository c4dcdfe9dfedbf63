//! Campaign domain models for the sales (BOFU) and engagement (MOFU) funnels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::artist::WILDCARD;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Draft,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

/// Records that can be narrowed by artist display name and campaign id.
pub trait ArtistScoped {
    fn campaign_id(&self) -> &str;
    fn artist_name(&self) -> &str;
}

/// A caller-supplied campaign selector: either the wildcard or one campaign id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CampaignSelector {
    #[default]
    All,
    Id(String),
}

impl CampaignSelector {
    /// Parses a query-string value, treating absent or empty input as the wildcard.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(WILDCARD) => CampaignSelector::All,
            Some(id) => CampaignSelector::Id(id.to_string()),
        }
    }

    pub fn as_id(&self) -> &str {
        match self {
            CampaignSelector::All => WILDCARD,
            CampaignSelector::Id(id) => id,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CampaignSelector::All)
    }
}

impl fmt::Display for CampaignSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

/// `{ "campaigns": [...] }` envelope returned by every campaign endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignList<T> {
    pub campaigns: Vec<T>,
}

impl<T> CampaignList<T> {
    pub fn new(campaigns: Vec<T>) -> Self {
        Self { campaigns }
    }
}

// ============================================================================
// Sales
// ============================================================================

/// A revenue platform tracked in the sales breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevenueSource {
    Bema,
    Patreon,
    GiveButter,
    Merch,
}

impl RevenueSource {
    /// Fixed key set, in display order.
    pub const ALL: [RevenueSource; 4] = [
        RevenueSource::Bema,
        RevenueSource::Patreon,
        RevenueSource::GiveButter,
        RevenueSource::Merch,
    ];

    /// JSON key of the source.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bema => "bema",
            Self::Patreon => "patreon",
            Self::GiveButter => "giveButter",
            Self::Merch => "merch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bema => "Bema",
            Self::Patreon => "Patreon",
            Self::GiveButter => "GiveButter",
            Self::Merch => "Merch",
        }
    }
}

/// Revenue per platform. Values sum to the owning campaign's `totalRevenue`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub bema: u64,
    pub patreon: u64,
    pub give_butter: u64,
    pub merch: u64,
}

impl RevenueBreakdown {
    pub fn get(&self, source: RevenueSource) -> u64 {
        match source {
            RevenueSource::Bema => self.bema,
            RevenueSource::Patreon => self.patreon,
            RevenueSource::GiveButter => self.give_butter,
            RevenueSource::Merch => self.merch,
        }
    }

    /// Sum over all four sources.
    pub fn total(&self) -> u64 {
        RevenueSource::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Element-wise sum with another breakdown.
    pub fn combined(&self, other: &RevenueBreakdown) -> RevenueBreakdown {
        RevenueBreakdown {
            bema: self.bema + other.bema,
            patreon: self.patreon + other.patreon,
            give_butter: self.give_butter + other.give_butter,
            merch: self.merch + other.merch,
        }
    }

    /// `(source, amount)` pairs in display order.
    pub fn entries(&self) -> [(RevenueSource, u64); 4] {
        RevenueSource::ALL.map(|s| (s, self.get(s)))
    }
}

/// Sales metrics for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: u64,
    pub revenue_breakdown: RevenueBreakdown,
    /// Percentage, 0-100.
    pub conversion_rate: f64,
    pub average_order_value: u64,
    pub total_orders: u64,
}

impl SalesMetrics {
    /// True when the breakdown sums to the reported total.
    pub fn is_balanced(&self) -> bool {
        self.revenue_breakdown.total() == self.total_revenue
    }
}

/// A campaign as shown on the sales view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesCampaign {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub status: CampaignStatus,
    pub sales_metrics: SalesMetrics,
}

impl SalesCampaign {
    /// Dropdown label, e.g. `New Album Launch (Luna Martinez)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.artist)
    }
}

impl ArtistScoped for SalesCampaign {
    fn campaign_id(&self) -> &str {
        &self.id
    }

    fn artist_name(&self) -> &str {
        &self.artist
    }
}

// ============================================================================
// Engagement
// ============================================================================

/// Email engagement metrics. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMetrics {
    pub open_rate: f64,
    pub click_rate: f64,
    pub bounce_rate: f64,
    pub total_sent: u64,
}

/// SMS engagement metrics. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMetrics {
    pub delivery_rate: f64,
    pub response_rate: f64,
    pub opt_out_rate: f64,
    pub total_sent: u64,
}

/// CRM audience counts per tier. The total is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmTiers {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl CrmTiers {
    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }

    pub fn combined(&self, other: &CrmTiers) -> CrmTiers {
        CrmTiers {
            gold: self.gold + other.gold,
            silver: self.silver + other.silver,
            bronze: self.bronze + other.bronze,
        }
    }
}

/// A campaign as shown on the engagement view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementCampaign {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub status: CampaignStatus,
    pub email_metrics: EmailMetrics,
    pub sms_metrics: SmsMetrics,
    pub crm_tiers: CrmTiers,
}

impl ArtistScoped for EngagementCampaign {
    fn campaign_id(&self) -> &str {
        &self.id
    }

    fn artist_name(&self) -> &str {
        &self.artist
    }
}

/// A standalone SMS campaign. Metrics are flat on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsCampaign {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub delivery_rate: f64,
    pub response_rate: f64,
    pub opt_out_rate: f64,
    pub total_sent: u64,
}

impl ArtistScoped for SmsCampaign {
    fn campaign_id(&self) -> &str {
        &self.id
    }

    fn artist_name(&self) -> &str {
        &self.artist
    }
}
