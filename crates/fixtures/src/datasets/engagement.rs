//! Engagement (MOFU) campaign dataset: email, SMS and CRM tiers per campaign.

use domain::models::{
    Artist, CampaignStatus, CrmTiers, EmailMetrics, EngagementCampaign, SmsMetrics,
};

/// All engagement campaigns, in display order.
pub fn engagement_campaigns() -> Vec<EngagementCampaign> {
    vec![
        EngagementCampaign {
            id: "camp1".to_string(),
            name: "New Album Launch".to_string(),
            artist: Artist::LunaMartinez.display_name().to_string(),
            status: CampaignStatus::Active,
            email_metrics: EmailMetrics {
                open_rate: 24.5,
                click_rate: 3.2,
                bounce_rate: 2.1,
                total_sent: 15420,
            },
            sms_metrics: SmsMetrics {
                delivery_rate: 98.5,
                response_rate: 12.3,
                opt_out_rate: 1.2,
                total_sent: 8950,
            },
            crm_tiers: CrmTiers {
                gold: 1250,
                silver: 3400,
                bronze: 8900,
            },
        },
        EngagementCampaign {
            id: "camp2".to_string(),
            name: "Summer Tour Announcement".to_string(),
            artist: Artist::EchoRivers.display_name().to_string(),
            status: CampaignStatus::Completed,
            email_metrics: EmailMetrics {
                open_rate: 28.1,
                click_rate: 4.7,
                bounce_rate: 1.8,
                total_sent: 22100,
            },
            sms_metrics: SmsMetrics {
                delivery_rate: 97.8,
                response_rate: 15.6,
                opt_out_rate: 0.9,
                total_sent: 12300,
            },
            crm_tiers: CrmTiers {
                gold: 2100,
                silver: 5600,
                bronze: 12400,
            },
        },
        EngagementCampaign {
            id: "camp3".to_string(),
            name: "Exclusive Merch Drop".to_string(),
            artist: Artist::NeonDreams.display_name().to_string(),
            status: CampaignStatus::Active,
            email_metrics: EmailMetrics {
                open_rate: 31.2,
                click_rate: 6.8,
                bounce_rate: 1.5,
                total_sent: 18750,
            },
            sms_metrics: SmsMetrics {
                delivery_rate: 99.1,
                response_rate: 18.4,
                opt_out_rate: 0.7,
                total_sent: 9800,
            },
            crm_tiers: CrmTiers {
                gold: 1800,
                silver: 4200,
                bronze: 9500,
            },
        },
    ]
}
