//! Top-of-funnel social view.
//!
//! Only known artists can be selected. Snapshots are non-deterministic, so every
//! selection change refetches.

use std::fmt;

use domain::models::{Artist, ArtistRef, DayWindow, SocialSnapshot};
use shared::format::{currency, thousands};
use tracing::{debug, error};

use super::{artist_options, SelectOption};
use crate::client::{ClientError, MetricsSource};
use crate::state::{FetchTicket, FetchTracker, LoadStatus, ViewState};

/// Artist and window a snapshot was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialSelection {
    pub artist: Artist,
    pub window: DayWindow,
}

impl Default for SocialSelection {
    fn default() -> Self {
        Self {
            artist: Artist::LunaMartinez,
            window: DayWindow::Full,
        }
    }
}

#[derive(Debug, Default)]
pub struct SocialView {
    selection: SocialSelection,
    snapshot: Option<SocialSnapshot>,
    status: LoadStatus,
    tracker: FetchTracker,
}

impl SocialView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> SocialSelection {
        self.selection
    }

    pub fn artist_options(&self) -> Vec<SelectOption> {
        artist_options(false)
    }

    pub fn window_options(&self) -> Vec<SelectOption> {
        [DayWindow::Week, DayWindow::Full]
            .iter()
            .map(|w| SelectOption::new(w.as_days(), format!("Last {} days", w.as_days())))
            .collect()
    }

    pub fn select_artist(&mut self, artist: Artist) -> FetchTicket<SocialSelection> {
        self.selection.artist = artist;
        self.begin_fetch()
    }

    pub fn select_window(&mut self, window: DayWindow) -> FetchTicket<SocialSelection> {
        self.selection.window = window;
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket<SocialSelection> {
        self.status = LoadStatus::Loading;
        self.tracker.issue(self.selection)
    }

    /// Applies a fetch result. Returns false if a newer selection superseded `ticket`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<SocialSelection>,
        result: Result<SocialSnapshot, ClientError>,
    ) -> bool {
        if !self.tracker.is_current(&ticket) {
            debug!(
                view = "social",
                artist = ticket.selection().artist.id(),
                generation = ticket.generation(),
                "Discarding stale response"
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                error!(view = "social", error = %e, "Failed to fetch social metrics");
                self.snapshot = None;
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    pub async fn refresh<M>(&mut self, source: &M)
    where
        M: MetricsSource + ?Sized,
    {
        let ticket = self.begin_fetch();
        let selection = *ticket.selection();
        let result = source
            .social(&ArtistRef::Known(selection.artist), selection.window)
            .await;
        self.complete(ticket, result);
    }

    pub fn state(&self) -> ViewState<SocialPanel> {
        match (&self.status, &self.snapshot) {
            (LoadStatus::Failed(msg), _) => ViewState::Failed(msg.clone()),
            (LoadStatus::Loaded, Some(snapshot)) => ViewState::Ready(SocialPanel {
                selection: self.selection,
                snapshot: snapshot.clone(),
            }),
            _ => ViewState::Loading,
        }
    }
}

/// Rendered social metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialPanel {
    pub selection: SocialSelection,
    pub snapshot: SocialSnapshot,
}

impl fmt::Display for SocialPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.selection.window.as_days();
        writeln!(
            f,
            "{}, last {} days",
            self.selection.artist.display_name(),
            days
        )?;

        for (platform, stats) in self.snapshot.platforms.entries() {
            writeln!(
                f,
                "{:<10} {} followers, {} avg likes, {} posts in {} days",
                platform.display_name(),
                thousands(stats.followers),
                stats.avg_likes,
                stats.posts,
                days
            )?;
        }

        writeln!(f, "Top Shared Content")?;
        for post in &self.snapshot.top_content {
            writeln!(
                f,
                "  [{}] {} ({} shares, {}% engagement)",
                post.platform.display_name().to_lowercase(),
                post.content,
                post.shares,
                post.engagement
            )?;
        }

        let ads = &self.snapshot.paid_ads;
        writeln!(f, "Paid Ad Performance")?;
        write!(
            f,
            "  Reach {}  Impressions {}  CTR {}%  Spend {}",
            thousands(ads.reach),
            thousands(ads.impressions),
            ads.ctr,
            currency(ads.spend)
        )
    }
}
