//! Sales view selection consistency.
//!
//! Detects a campaign selection left over from a previously chosen artist.

use crate::models::{ArtistRef, ArtistScoped, CampaignSelector};

/// Returns whether the selected campaign belongs to the selected artist.
///
/// Always true when either selector is the wildcard. A campaign id missing from
/// `campaigns` or an unknown artist never matches.
pub fn is_consistent_selection<T>(
    artist: &ArtistRef,
    campaign: &CampaignSelector,
    campaigns: &[T],
) -> bool
where
    T: ArtistScoped,
{
    let campaign_id = match campaign {
        CampaignSelector::All => return true,
        CampaignSelector::Id(id) => id,
    };

    let artist_name = match artist {
        ArtistRef::All => return true,
        ArtistRef::Known(known) => known.display_name(),
        ArtistRef::Unknown(_) => return false,
    };

    campaigns
        .iter()
        .find(|c| c.campaign_id() == campaign_id)
        .map(|c| c.artist_name() == artist_name)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Artist;

    struct Row(&'static str, &'static str);

    impl ArtistScoped for Row {
        fn campaign_id(&self) -> &str {
            self.0
        }
        fn artist_name(&self) -> &str {
            self.1
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row("sales1", "Luna Martinez"),
            Row("sales2", "Echo Rivers"),
        ]
    }

    #[test]
    fn test_wildcards_are_always_consistent() {
        let campaign = CampaignSelector::Id("sales2".into());
        assert!(is_consistent_selection(&ArtistRef::All, &campaign, &rows()));
        assert!(is_consistent_selection(
            &Artist::NeonDreams.into(),
            &CampaignSelector::All,
            &rows()
        ));
        assert!(is_consistent_selection(
            &ArtistRef::Unknown("x".into()),
            &CampaignSelector::All,
            &Vec::<Row>::new()
        ));
    }

    #[test]
    fn test_matching_selection() {
        let campaign = CampaignSelector::Id("sales1".into());
        assert!(is_consistent_selection(
            &Artist::LunaMartinez.into(),
            &campaign,
            &rows()
        ));
    }

    #[test]
    fn test_mismatched_selection() {
        let campaign = CampaignSelector::Id("sales1".into());
        assert!(!is_consistent_selection(
            &Artist::EchoRivers.into(),
            &campaign,
            &rows()
        ));
    }

    #[test]
    fn test_missing_campaign_is_inconsistent() {
        let campaign = CampaignSelector::Id("sales9".into());
        assert!(!is_consistent_selection(
            &Artist::LunaMartinez.into(),
            &campaign,
            &rows()
        ));
    }

    #[test]
    fn test_unknown_artist_is_inconsistent() {
        let campaign = CampaignSelector::Id("sales1".into());
        assert!(!is_consistent_selection(
            &ArtistRef::Unknown("artist9".into()),
            &campaign,
            &rows()
        ));
    }
}
