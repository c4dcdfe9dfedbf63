//! Dashboard view-models.
//!
//! Each view renders through `Display`, so the dashboard binary and tests see the
//! same text.

pub mod engagement;
pub mod sales;
pub mod social;

pub use engagement::{EngagementPanel, EngagementView};
pub use sales::{SalesPanel, SalesView};
pub use social::{SocialPanel, SocialSelection, SocialView};

use domain::models::{Artist, ArtistRef, WILDCARD};

/// One entry of a selector dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Artist dropdown entries, optionally led by the wildcard.
pub fn artist_options(include_all: bool) -> Vec<SelectOption> {
    let all = include_all.then(|| SelectOption::new(WILDCARD, "All Artists"));
    all.into_iter()
        .chain(
            Artist::ALL
                .iter()
                .map(|a| SelectOption::new(a.id(), a.display_name())),
        )
        .collect()
}

/// Label for an artist selection. Unknown ids are shown verbatim.
pub fn artist_label(artist: &ArtistRef) -> String {
    match artist {
        ArtistRef::All => "All Artists".to_string(),
        ArtistRef::Known(known) => known.display_name().to_string(),
        ArtistRef::Unknown(raw) => raw.clone(),
    }
}
