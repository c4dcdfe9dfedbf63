//! Query parameters accepted by the metrics endpoints.

use serde::Deserialize;
use shared::validation::{validate_days, validate_identifier};
use validator::Validate;

use super::artist::{Artist, ArtistRef};
use super::campaign::CampaignSelector;
use super::social::DayWindow;

/// Query parameters for `GET /api/metrics/sales`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SalesQuery {
    /// Artist identifier; defaults to `all`
    #[serde(default)]
    #[validate(custom(function = "validate_identifier"))]
    pub artist: Option<String>,
    /// Campaign identifier; defaults to `all`
    #[serde(default)]
    #[validate(custom(function = "validate_identifier"))]
    pub campaign: Option<String>,
}

impl SalesQuery {
    pub fn artist(&self) -> ArtistRef {
        ArtistRef::parse_or(self.artist.as_deref(), ArtistRef::All)
    }

    pub fn campaign(&self) -> CampaignSelector {
        CampaignSelector::parse(self.campaign.as_deref())
    }
}

/// Query parameters for `GET /api/metrics/email`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EngagementQuery {
    /// Artist identifier; defaults to `all`
    #[serde(default)]
    #[validate(custom(function = "validate_identifier"))]
    pub artist: Option<String>,
}

impl EngagementQuery {
    pub fn artist(&self) -> ArtistRef {
        ArtistRef::parse_or(self.artist.as_deref(), ArtistRef::All)
    }
}

/// Query parameters for `GET /api/metrics/social`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SocialQuery {
    /// Artist identifier; defaults to `artist1`
    #[serde(default)]
    #[validate(custom(function = "validate_identifier"))]
    pub artist: Option<String>,
    /// Day window; `7` for a week, anything else for the full window (default `30`)
    #[serde(default)]
    #[validate(custom(function = "validate_days"))]
    pub days: Option<String>,
}

impl SocialQuery {
    pub fn artist(&self) -> ArtistRef {
        ArtistRef::parse_or(self.artist.as_deref(), Artist::LunaMartinez.into())
    }

    pub fn window(&self) -> DayWindow {
        match self.days.as_deref() {
            Some(days) if !days.is_empty() => DayWindow::parse(days),
            _ => DayWindow::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_query_defaults() {
        let query = SalesQuery::default();
        assert_eq!(query.artist(), ArtistRef::All);
        assert_eq!(query.campaign(), CampaignSelector::All);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_sales_query_rejects_malformed_identifiers() {
        let query = SalesQuery {
            artist: Some("artist 1".into()),
            campaign: Some("sales1".into()),
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("artist"));
        assert!(!errors.field_errors().contains_key("campaign"));
    }

    #[test]
    fn test_engagement_query_artist() {
        let query = EngagementQuery {
            artist: Some("artist2".into()),
        };
        assert_eq!(query.artist(), ArtistRef::Known(Artist::EchoRivers));
    }

    #[test]
    fn test_social_query_defaults() {
        let query = SocialQuery::default();
        assert_eq!(query.artist(), ArtistRef::Known(Artist::LunaMartinez));
        assert_eq!(query.window(), DayWindow::Full);
    }

    #[test]
    fn test_social_query_week_window() {
        let query = SocialQuery {
            artist: Some("artist3".into()),
            days: Some("7".into()),
        };
        assert_eq!(query.window(), DayWindow::Week);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_social_query_rejects_malformed_days() {
        let query = SocialQuery {
            artist: None,
            days: Some("seven".into()),
        };
        assert!(query.validate().is_err());
        // Still degrades to the full window when validation is not enforced
        assert_eq!(query.window(), DayWindow::Full);
    }

    #[test]
    fn test_empty_values_pass_validation_and_mean_defaults() {
        let sales = SalesQuery {
            artist: Some(String::new()),
            campaign: Some("all".into()),
        };
        assert!(sales.validate().is_ok());
        assert_eq!(sales.artist(), ArtistRef::All);
        assert_eq!(sales.campaign(), CampaignSelector::All);

        let social = SocialQuery {
            artist: Some(String::new()),
            days: Some(String::new()),
        };
        assert!(social.validate().is_ok());
        assert_eq!(social.artist(), ArtistRef::Known(Artist::LunaMartinez));
        assert_eq!(social.window(), DayWindow::Full);
    }
}
