//! Mock social snapshot generator.
//!
//! Stands in for the social analytics provider until it is integrated. Output is
//! intentionally non-idempotent: every call draws fresh jitter, so two calls with the
//! same artist and window differ. Only the follower baseline tier and the window
//! scaling are stable properties.

use rand::Rng;

use crate::models::{
    Artist, ArtistRef, DayWindow, PaidAdStats, Platform, PlatformSnapshot, PlatformStats,
    SocialSnapshot, TopContent,
};
use shared::numeric::round_to;

/// Source of uniform values in `[0, 1)`.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

/// Jitter backed by any `rand` generator.
pub struct RngJitter<R>(pub R);

impl RngJitter<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RngJitter(rand::thread_rng())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Constant jitter, for deterministic output.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn next_unit(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Follower baseline tier for an artist.
pub fn baseline_followers(artist: &ArtistRef) -> u64 {
    match artist {
        ArtistRef::Known(Artist::LunaMartinez) => 25_000,
        ArtistRef::Known(Artist::EchoRivers) => 35_000,
        _ => 45_000,
    }
}

/// Fixed per-platform shape of the mock data.
struct PlatformProfile {
    /// Follower multiplier over the baseline, in thousandths.
    follower_permille: u64,
    follower_spread: f64,
    likes_min: f64,
    likes_spread: f64,
    posts_min: f64,
    posts_spread: f64,
}

const INSTAGRAM: PlatformProfile = PlatformProfile {
    follower_permille: 1200,
    follower_spread: 10_000.0,
    likes_min: 100.0,
    likes_spread: 500.0,
    posts_min: 5.0,
    posts_spread: 20.0,
};

const TWITTER: PlatformProfile = PlatformProfile {
    follower_permille: 800,
    follower_spread: 5_000.0,
    likes_min: 50.0,
    likes_spread: 200.0,
    posts_min: 10.0,
    posts_spread: 30.0,
};

const YOUTUBE: PlatformProfile = PlatformProfile {
    follower_permille: 2000,
    follower_spread: 20_000.0,
    likes_min: 200.0,
    likes_spread: 1000.0,
    posts_min: 2.0,
    posts_spread: 10.0,
};

/// Top posts: platform, text, shares over the full window, engagement percentage.
const TOP_CONTENT: [(Platform, &str, u64, f64); 3] = [
    (
        Platform::Instagram,
        "Behind the scenes of new music video shoot 🎬",
        1250,
        8.5,
    ),
    (
        Platform::Twitter,
        "New single dropping this Friday! Who's ready? 🔥",
        890,
        6.2,
    ),
    (
        Platform::Youtube,
        "Acoustic version of \"Midnight Dreams\" live session",
        2100,
        12.3,
    ),
];

fn platform_stats(
    profile: &PlatformProfile,
    baseline: u64,
    window: DayWindow,
    jitter: &mut impl JitterSource,
) -> PlatformStats {
    let base = baseline * profile.follower_permille / 1000;
    let followers = base + (jitter.next_unit() * profile.follower_spread).floor() as u64;
    let avg_likes = window.scale(jitter.next_unit() * profile.likes_spread + profile.likes_min);
    let posts = window.scale(jitter.next_unit() * profile.posts_spread + profile.posts_min);

    PlatformStats {
        followers,
        avg_likes,
        posts,
    }
}

/// Generates a social snapshot for `artist` over `window`.
///
/// Followers depend only on the artist baseline plus jitter; likes, posts, shares and
/// paid reach/impressions/spend are scaled by the window. CTR is never scaled.
pub fn generate_snapshot(
    artist: &ArtistRef,
    window: DayWindow,
    jitter: &mut impl JitterSource,
) -> SocialSnapshot {
    let baseline = baseline_followers(artist);

    let platforms = PlatformSnapshot {
        instagram: platform_stats(&INSTAGRAM, baseline, window, jitter),
        twitter: platform_stats(&TWITTER, baseline, window, jitter),
        youtube: platform_stats(&YOUTUBE, baseline, window, jitter),
        facebook: None,
    };

    let top_content = TOP_CONTENT
        .iter()
        .map(|(platform, content, shares, engagement)| TopContent {
            platform: *platform,
            content: (*content).to_string(),
            shares: window.scale(*shares as f64),
            engagement: *engagement,
        })
        .collect();

    let paid_ads = PaidAdStats {
        reach: window.scale(jitter.next_unit() * 100_000.0 + 50_000.0),
        impressions: window.scale(jitter.next_unit() * 500_000.0 + 200_000.0),
        ctr: round_to(jitter.next_unit() * 3.0 + 1.0, 2),
        spend: window.scale(jitter.next_unit() * 2_000.0 + 500.0),
    };

    tracing::debug!(
        artist = %artist,
        days = window.as_days(),
        baseline,
        "Generated mock social snapshot"
    );

    SocialSnapshot {
        platforms,
        top_content,
        paid_ads,
    }
}
