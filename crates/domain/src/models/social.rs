//! Social (TOFU) snapshot models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Youtube,
    Facebook,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Youtube => "YouTube",
            Self::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Reporting window selected on the social view.
///
/// `7` selects the one-week window; every other value selects the full window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayWindow {
    Week,
    #[default]
    Full,
}

impl DayWindow {
    /// Parses a `days` query value. Never fails.
    pub fn parse(value: &str) -> Self {
        if value == "7" {
            DayWindow::Week
        } else {
            DayWindow::Full
        }
    }

    /// Scale applied to activity fields, in tenths.
    pub fn activity_tenths(&self) -> u64 {
        match self {
            DayWindow::Week => 3,
            DayWindow::Full => 10,
        }
    }

    /// Applies the activity scale and floors to a whole count.
    pub fn scale(&self, value: f64) -> u64 {
        (value * self.activity_tenths() as f64 / 10.0).floor() as u64
    }

    /// Query-string value for this window.
    pub fn as_days(&self) -> &'static str {
        match self {
            DayWindow::Week => "7",
            DayWindow::Full => "30",
        }
    }
}

/// Audience and activity numbers for one platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub followers: u64,
    pub avg_likes: u64,
    pub posts: u64,
}

/// Per-platform stats. Facebook is declared but not populated by the mock provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub instagram: PlatformStats,
    pub twitter: PlatformStats,
    pub youtube: PlatformStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<PlatformStats>,
}

impl PlatformSnapshot {
    /// Populated platforms in display order.
    pub fn entries(&self) -> Vec<(Platform, PlatformStats)> {
        let mut out = vec![
            (Platform::Instagram, self.instagram),
            (Platform::Twitter, self.twitter),
            (Platform::Youtube, self.youtube),
        ];
        if let Some(facebook) = self.facebook {
            out.push((Platform::Facebook, facebook));
        }
        out
    }

    pub fn total_followers(&self) -> u64 {
        self.entries().iter().map(|(_, s)| s.followers).sum()
    }
}

/// A top-performing post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopContent {
    pub platform: Platform,
    pub content: String,
    pub shares: u64,
    /// Percentage.
    pub engagement: f64,
}

/// Paid advertising summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidAdStats {
    pub reach: u64,
    pub impressions: u64,
    /// Click-through rate percentage, two decimals.
    pub ctr: f64,
    pub spend: u64,
}

/// Social metrics for one artist and window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSnapshot {
    pub platforms: PlatformSnapshot,
    pub top_content: Vec<TopContent>,
    pub paid_ads: PaidAdStats,
}
