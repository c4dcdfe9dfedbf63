//! Standalone SMS campaign dataset, separate from the engagement campaigns.

use domain::models::{Artist, SmsCampaign};

pub fn sms_campaigns() -> Vec<SmsCampaign> {
    vec![
        SmsCampaign {
            id: "sms1".to_string(),
            name: "Flash Sale Alert".to_string(),
            artist: Artist::LunaMartinez.display_name().to_string(),
            delivery_rate: 99.2,
            response_rate: 22.1,
            opt_out_rate: 0.8,
            total_sent: 5420,
        },
        SmsCampaign {
            id: "sms2".to_string(),
            name: "Concert Reminder".to_string(),
            artist: Artist::EchoRivers.display_name().to_string(),
            delivery_rate: 98.7,
            response_rate: 18.5,
            opt_out_rate: 1.1,
            total_sent: 8900,
        },
    ]
}
