//! Artist and campaign filtering shared by the endpoints and the dashboard views.
//!
//! Matching is strict equality on the record's artist display name and campaign id.
//! Input order is preserved and an empty result is a valid outcome, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ArtistRef, ArtistScoped, CampaignSelector};

/// How an unrecognized artist identifier is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownArtistPolicy {
    /// No artist narrowing, as if the wildcard had been supplied.
    #[default]
    Ignore,
    /// Nothing matches, yielding an empty result.
    MatchNone,
    /// The request is rejected.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown artist identifier: {0}")]
    UnknownArtist(String),
}

/// Artist and campaign selectors applied to a campaign list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub artist: ArtistRef,
    pub campaign: CampaignSelector,
}

impl CampaignFilter {
    pub fn new(artist: ArtistRef, campaign: CampaignSelector) -> Self {
        Self { artist, campaign }
    }

    /// Filter narrowing by artist only.
    pub fn for_artist(artist: ArtistRef) -> Self {
        Self {
            artist,
            campaign: CampaignSelector::All,
        }
    }

    /// True when neither selector narrows anything.
    pub fn is_identity(&self) -> bool {
        self.artist.is_wildcard() && self.campaign.is_wildcard()
    }
}

/// What the artist selector requires of a record.
enum ArtistMatch {
    Any,
    Name(&'static str),
    Nothing,
}

fn artist_match(artist: &ArtistRef, policy: UnknownArtistPolicy) -> Result<ArtistMatch, FilterError> {
    match artist {
        ArtistRef::All => Ok(ArtistMatch::Any),
        ArtistRef::Known(known) => Ok(ArtistMatch::Name(known.display_name())),
        ArtistRef::Unknown(raw) => match policy {
            UnknownArtistPolicy::Ignore => Ok(ArtistMatch::Any),
            UnknownArtistPolicy::MatchNone => Ok(ArtistMatch::Nothing),
            UnknownArtistPolicy::Reject => Err(FilterError::UnknownArtist(raw.clone())),
        },
    }
}

/// Narrows `records` to those matching `filter`, preserving order.
pub fn filter_campaigns<T>(
    records: &[T],
    filter: &CampaignFilter,
    policy: UnknownArtistPolicy,
) -> Result<Vec<T>, FilterError>
where
    T: ArtistScoped + Clone,
{
    let artist = artist_match(&filter.artist, policy)?;

    let filtered = records
        .iter()
        .filter(|record| match artist {
            ArtistMatch::Any => true,
            ArtistMatch::Name(name) => record.artist_name() == name,
            ArtistMatch::Nothing => false,
        })
        .filter(|record| match &filter.campaign {
            CampaignSelector::All => true,
            CampaignSelector::Id(id) => record.campaign_id() == id,
        })
        .cloned()
        .collect();

    Ok(filtered)
}

/// Records belonging to `artist`, preserving order. Unknown artists own nothing.
pub fn campaigns_for_artist<'a, T>(records: &'a [T], artist: &ArtistRef) -> Vec<&'a T>
where
    T: ArtistScoped,
{
    match artist {
        ArtistRef::All => records.iter().collect(),
        ArtistRef::Known(known) => records
            .iter()
            .filter(|r| r.artist_name() == known.display_name())
            .collect(),
        ArtistRef::Unknown(_) => Vec::new(),
    }
}
