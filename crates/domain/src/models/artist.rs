//! Artist identifiers and the shared identifier-to-name lookup.
//!
//! Every endpoint and every dashboard view resolves artists through this module so
//! there is exactly one copy of the mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard value accepted by every artist and campaign selector.
pub const WILDCARD: &str = "all";

/// An artist known to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Artist {
    LunaMartinez,
    EchoRivers,
    NeonDreams,
}

impl Artist {
    /// All known artists in dropdown order.
    pub const ALL: [Artist; 3] = [Artist::LunaMartinez, Artist::EchoRivers, Artist::NeonDreams];

    /// Short identifier used in query strings.
    pub fn id(&self) -> &'static str {
        match self {
            Artist::LunaMartinez => "artist1",
            Artist::EchoRivers => "artist2",
            Artist::NeonDreams => "artist3",
        }
    }

    /// Display name stored on every fixture record.
    pub fn display_name(&self) -> &'static str {
        match self {
            Artist::LunaMartinez => "Luna Martinez",
            Artist::EchoRivers => "Echo Rivers",
            Artist::NeonDreams => "Neon Dreams",
        }
    }

    /// Looks up an artist by its short identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A caller-supplied artist selector.
///
/// The identifier space is closed: anything that is neither the wildcard nor a known
/// artist id becomes [`ArtistRef::Unknown`] and is never silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ArtistRef {
    #[default]
    All,
    Known(Artist),
    Unknown(String),
}

impl ArtistRef {
    /// Parses a query-string value. Never fails.
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD {
            return ArtistRef::All;
        }
        match Artist::from_id(value) {
            Some(artist) => ArtistRef::Known(artist),
            None => ArtistRef::Unknown(value.to_string()),
        }
    }

    /// Parses an optional value, treating absent or empty input as `default`.
    pub fn parse_or(value: Option<&str>, default: ArtistRef) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::parse(v),
            _ => default,
        }
    }

    /// Display name used for record matching, or `None` for the wildcard and unknown ids.
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            ArtistRef::Known(artist) => Some(artist.display_name()),
            ArtistRef::All | ArtistRef::Unknown(_) => None,
        }
    }

    /// Identifier as it appears in query strings.
    pub fn as_id(&self) -> &str {
        match self {
            ArtistRef::All => WILDCARD,
            ArtistRef::Known(artist) => artist.id(),
            ArtistRef::Unknown(raw) => raw,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ArtistRef::All)
    }
}

impl From<Artist> for ArtistRef {
    fn from(artist: Artist) -> Self {
        ArtistRef::Known(artist)
    }
}

impl fmt::Display for ArtistRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_ids_round_trip() {
        for artist in Artist::ALL {
            assert_eq!(Artist::from_id(artist.id()), Some(artist));
        }
    }

    #[test]
    fn test_artist_display_names() {
        assert_eq!(Artist::LunaMartinez.display_name(), "Luna Martinez");
        assert_eq!(Artist::EchoRivers.display_name(), "Echo Rivers");
        assert_eq!(Artist::NeonDreams.display_name(), "Neon Dreams");
        assert_eq!(Artist::EchoRivers.to_string(), "Echo Rivers");
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(ArtistRef::parse("all"), ArtistRef::All);
        assert!(ArtistRef::parse("all").is_wildcard());
        assert_eq!(ArtistRef::All.display_name(), None);
    }

    #[test]
    fn test_parse_known() {
        assert_eq!(
            ArtistRef::parse("artist2"),
            ArtistRef::Known(Artist::EchoRivers)
        );
        assert_eq!(
            ArtistRef::parse("artist3").display_name(),
            Some("Neon Dreams")
        );
    }

    #[test]
    fn test_parse_unknown_is_explicit() {
        let parsed = ArtistRef::parse("artist9");
        assert_eq!(parsed, ArtistRef::Unknown("artist9".to_string()));
        assert_eq!(parsed.display_name(), None);
        assert_eq!(parsed.as_id(), "artist9");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(ArtistRef::parse("ALL"), ArtistRef::Unknown(_)));
        assert!(matches!(ArtistRef::parse("Artist1"), ArtistRef::Unknown(_)));
    }

    #[test]
    fn test_parse_or_default() {
        let default = ArtistRef::Known(Artist::LunaMartinez);
        assert_eq!(ArtistRef::parse_or(None, default.clone()), default);
        assert_eq!(ArtistRef::parse_or(Some(""), default.clone()), default);
        assert_eq!(
            ArtistRef::parse_or(Some("artist3"), default),
            ArtistRef::Known(Artist::NeonDreams)
        );
    }
}
