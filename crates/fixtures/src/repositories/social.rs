//! Social snapshot repository.
//!
//! Backed by the mock generator until the social analytics provider is integrated.

use domain::models::{ArtistRef, DayWindow, SocialSnapshot};
use domain::services::{generate_snapshot, JitterSource, RngJitter};

use crate::metrics::LookupTimer;

/// Repository for social snapshots. Results are non-deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialRepository;

impl SocialRepository {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot for an artist and window using thread-local randomness.
    pub fn snapshot(&self, artist: &ArtistRef, window: DayWindow) -> SocialSnapshot {
        self.snapshot_with(artist, window, &mut RngJitter::thread())
    }

    /// Snapshot using a caller-supplied jitter source.
    pub fn snapshot_with(
        &self,
        artist: &ArtistRef,
        window: DayWindow,
        jitter: &mut impl JitterSource,
    ) -> SocialSnapshot {
        let timer = LookupTimer::new("social");
        let snapshot = generate_snapshot(artist, window, jitter);
        timer.finish(snapshot.platforms.entries().len());
        snapshot
    }
}
