//! Aggregate statistics over filtered campaign lists.
//!
//! Every aggregate is defined on an empty list and evaluates to zero there.

use serde::Serialize;
use shared::numeric::{mean, percentage_of, safe_ratio};

use crate::models::{
    CampaignStatus, CrmTiers, EngagementCampaign, RevenueBreakdown, RevenueSource, SalesCampaign,
};

/// One row of the aggregated revenue breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownShare {
    pub source: RevenueSource,
    pub revenue: u64,
    /// Share of aggregated revenue, 0-100.
    pub percentage: f64,
}

/// Sales view summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub campaign_count: usize,
    pub total_revenue: u64,
    pub total_orders: u64,
    pub average_conversion_rate: f64,
    /// Aggregated revenue divided by aggregated orders; 0 when there are no orders.
    pub average_order_value: f64,
    pub breakdown: RevenueBreakdown,
    pub shares: Vec<BreakdownShare>,
}

impl SalesSummary {
    pub fn is_empty(&self) -> bool {
        self.campaign_count == 0
    }
}

/// Summarizes a sales campaign list.
pub fn summarize_sales(campaigns: &[SalesCampaign]) -> SalesSummary {
    let total_revenue: u64 = campaigns
        .iter()
        .map(|c| c.sales_metrics.total_revenue)
        .sum();
    let total_orders: u64 = campaigns.iter().map(|c| c.sales_metrics.total_orders).sum();
    let average_conversion_rate = mean(campaigns.iter().map(|c| c.sales_metrics.conversion_rate));

    let breakdown = campaigns
        .iter()
        .fold(RevenueBreakdown::default(), |acc, c| {
            acc.combined(&c.sales_metrics.revenue_breakdown)
        });

    let shares = breakdown
        .entries()
        .into_iter()
        .map(|(source, revenue)| BreakdownShare {
            source,
            revenue,
            percentage: percentage_of(revenue as f64, total_revenue as f64),
        })
        .collect();

    SalesSummary {
        campaign_count: campaigns.len(),
        total_revenue,
        total_orders,
        average_conversion_rate,
        average_order_value: safe_ratio(total_revenue as f64, total_orders as f64),
        breakdown,
        shares,
    }
}

/// Tier totals for a single engagement campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAudience {
    pub campaign_id: String,
    pub tiers: CrmTiers,
    pub total_audience: u64,
}

/// Engagement view summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub campaign_count: usize,
    pub active_campaigns: usize,
    pub average_open_rate: f64,
    pub tiers: CrmTiers,
    pub total_audience: u64,
    pub per_campaign: Vec<CampaignAudience>,
}

impl EngagementSummary {
    pub fn is_empty(&self) -> bool {
        self.campaign_count == 0
    }
}

/// Summarizes an engagement campaign list.
pub fn summarize_engagement(campaigns: &[EngagementCampaign]) -> EngagementSummary {
    let per_campaign: Vec<CampaignAudience> = campaigns
        .iter()
        .map(|c| CampaignAudience {
            campaign_id: c.id.clone(),
            tiers: c.crm_tiers,
            total_audience: c.crm_tiers.total(),
        })
        .collect();

    let tiers = campaigns
        .iter()
        .fold(CrmTiers::default(), |acc, c| acc.combined(&c.crm_tiers));

    EngagementSummary {
        campaign_count: campaigns.len(),
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        average_open_rate: mean(campaigns.iter().map(|c| c.email_metrics.open_rate)),
        tiers,
        total_audience: tiers.total(),
        per_campaign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailMetrics, SalesMetrics, SmsMetrics};

    fn sales(id: &str, revenue: [u64; 4], orders: u64, conversion: f64) -> SalesCampaign {
        let breakdown = RevenueBreakdown {
            bema: revenue[0],
            patreon: revenue[1],
            give_butter: revenue[2],
            merch: revenue[3],
        };
        SalesCampaign {
            id: id.into(),
            name: id.into(),
            artist: "Luna Martinez".into(),
            status: CampaignStatus::Active,
            sales_metrics: SalesMetrics {
                total_revenue: breakdown.total(),
                revenue_breakdown: breakdown,
                conversion_rate: conversion,
                average_order_value: safe_ratio(breakdown.total() as f64, orders as f64) as u64,
                total_orders: orders,
            },
        }
    }

    fn engagement(id: &str, status: CampaignStatus, open_rate: f64, tiers: [u64; 3]) -> EngagementCampaign {
        EngagementCampaign {
            id: id.into(),
            name: id.into(),
            artist: "Echo Rivers".into(),
            status,
            email_metrics: EmailMetrics {
                open_rate,
                click_rate: 0.0,
                bounce_rate: 0.0,
                total_sent: 0,
            },
            sms_metrics: SmsMetrics {
                delivery_rate: 0.0,
                response_rate: 0.0,
                opt_out_rate: 0.0,
                total_sent: 0,
            },
            crm_tiers: CrmTiers {
                gold: tiers[0],
                silver: tiers[1],
                bronze: tiers[2],
            },
        }
    }

    #[test]
    fn test_summarize_sales_empty() {
        let summary = summarize_sales(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.average_conversion_rate, 0.0);
        assert_eq!(summary.average_order_value, 0.0);
        assert_eq!(summary.breakdown.total(), 0);
        assert_eq!(summary.shares.len(), 4);
        assert!(summary
            .shares
            .iter()
            .all(|s| s.percentage == 0.0 && !s.percentage.is_nan()));
    }

    #[test]
    fn test_summarize_sales_totals() {
        let campaigns = vec![
            sales("a", [100, 200, 300, 400], 10, 2.0),
            sales("b", [0, 0, 0, 1000], 40, 4.0),
        ];
        let summary = summarize_sales(&campaigns);
        assert_eq!(summary.campaign_count, 2);
        assert_eq!(summary.total_revenue, 2000);
        assert_eq!(summary.total_orders, 50);
        assert_eq!(summary.average_conversion_rate, 3.0);
        assert_eq!(summary.average_order_value, 40.0);
        assert_eq!(summary.breakdown.merch, 1400);
        assert_eq!(summary.breakdown.total(), summary.total_revenue);
    }

    #[test]
    fn test_summarize_sales_shares() {
        let campaigns = vec![sales("a", [250, 250, 0, 500], 1, 1.0)];
        let summary = summarize_sales(&campaigns);
        let pct: Vec<f64> = summary.shares.iter().map(|s| s.percentage).collect();
        assert_eq!(pct, vec![25.0, 25.0, 0.0, 50.0]);
        assert_eq!(summary.shares[2].source, RevenueSource::GiveButter);
    }

    #[test]
    fn test_summarize_sales_zero_orders_guard() {
        let campaigns = vec![sales("a", [10, 0, 0, 0], 0, 1.0)];
        let summary = summarize_sales(&campaigns);
        assert_eq!(summary.average_order_value, 0.0);
    }

    #[test]
    fn test_summarize_engagement_empty() {
        let summary = summarize_engagement(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.average_open_rate, 0.0);
        assert_eq!(summary.total_audience, 0);
        assert_eq!(summary.active_campaigns, 0);
        assert!(summary.per_campaign.is_empty());
    }

    #[test]
    fn test_summarize_engagement_totals() {
        let campaigns = vec![
            engagement("a", CampaignStatus::Active, 20.0, [1, 2, 3]),
            engagement("b", CampaignStatus::Completed, 30.0, [10, 20, 30]),
            engagement("c", CampaignStatus::Draft, 40.0, [0, 0, 0]),
        ];
        let summary = summarize_engagement(&campaigns);
        assert_eq!(summary.campaign_count, 3);
        assert_eq!(summary.active_campaigns, 1);
        assert_eq!(summary.average_open_rate, 30.0);
        assert_eq!(summary.tiers.gold, 11);
        assert_eq!(summary.total_audience, 66);
        assert_eq!(summary.per_campaign[1].total_audience, 60);
        assert_eq!(summary.per_campaign[2].campaign_id, "c");
    }
}
