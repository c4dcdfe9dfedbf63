//! Sales (BOFU) campaign dataset.

use domain::models::{Artist, CampaignStatus, RevenueBreakdown, SalesCampaign, SalesMetrics};

#[allow(clippy::too_many_arguments)]
fn campaign(
    id: &str,
    name: &str,
    artist: Artist,
    status: CampaignStatus,
    revenue_breakdown: RevenueBreakdown,
    conversion_rate: f64,
    average_order_value: u64,
    total_orders: u64,
) -> SalesCampaign {
    SalesCampaign {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.display_name().to_string(),
        status,
        sales_metrics: SalesMetrics {
            total_revenue: revenue_breakdown.total(),
            revenue_breakdown,
            conversion_rate,
            average_order_value,
            total_orders,
        },
    }
}

/// All sales campaigns, in display order.
pub fn sales_campaigns() -> Vec<SalesCampaign> {
    vec![
        campaign(
            "sales1",
            "New Album Launch",
            Artist::LunaMartinez,
            CampaignStatus::Active,
            RevenueBreakdown {
                bema: 18500,
                patreon: 12200,
                give_butter: 8950,
                merch: 5600,
            },
            3.2,
            28,
            1616,
        ),
        campaign(
            "sales2",
            "Summer Tour Announcement",
            Artist::EchoRivers,
            CampaignStatus::Completed,
            RevenueBreakdown {
                bema: 28900,
                patreon: 19200,
                give_butter: 12400,
                merch: 7300,
            },
            4.1,
            35,
            1937,
        ),
        campaign(
            "sales3",
            "Exclusive Merch Drop",
            Artist::NeonDreams,
            CampaignStatus::Active,
            RevenueBreakdown {
                bema: 8200,
                patreon: 7800,
                give_butter: 4900,
                merch: 11200,
            },
            5.8,
            42,
            764,
        ),
    ]
}
