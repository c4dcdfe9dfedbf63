//! Middle-of-funnel engagement view. Refetches whenever the artist changes.

use std::fmt;

use domain::models::{ArtistRef, EngagementCampaign};
use domain::services::{summarize_engagement, EngagementSummary};
use shared::format::{percent, thousands};
use tracing::{debug, error};

use super::{artist_label, artist_options, SelectOption};
use crate::client::{ClientError, MetricsSource};
use crate::state::{FetchTicket, FetchTracker, LoadStatus, ViewState};

#[derive(Debug, Default)]
pub struct EngagementView {
    artist: ArtistRef,
    campaigns: Vec<EngagementCampaign>,
    status: LoadStatus,
    tracker: FetchTracker,
}

impl EngagementView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artist(&self) -> &ArtistRef {
        &self.artist
    }

    pub fn artist_options(&self) -> Vec<SelectOption> {
        artist_options(true)
    }

    /// Changes the artist and issues a ticket for the matching fetch.
    pub fn select_artist(&mut self, artist: ArtistRef) -> FetchTicket<ArtistRef> {
        self.artist = artist;
        self.begin_fetch()
    }

    /// Issues a ticket for the current artist.
    pub fn begin_fetch(&mut self) -> FetchTicket<ArtistRef> {
        self.status = LoadStatus::Loading;
        self.tracker.issue(self.artist.clone())
    }

    /// Applies a fetch result. Returns false if a newer selection superseded `ticket`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<ArtistRef>,
        result: Result<Vec<EngagementCampaign>, ClientError>,
    ) -> bool {
        if !self.tracker.is_current(&ticket) {
            debug!(
                view = "engagement",
                artist = %ticket.selection(),
                generation = ticket.generation(),
                "Discarding stale response"
            );
            return false;
        }

        match result {
            Ok(campaigns) => {
                debug!(
                    view = "engagement",
                    artist = %ticket.selection(),
                    campaigns = campaigns.len(),
                    "Campaigns loaded"
                );
                self.campaigns = campaigns;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                error!(view = "engagement", error = %e, "Failed to fetch engagement metrics");
                self.campaigns.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Fetches campaigns for the current artist from `source`.
    pub async fn refresh<M>(&mut self, source: &M)
    where
        M: MetricsSource + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = source.email(ticket.selection()).await;
        self.complete(ticket, result);
    }

    pub fn state(&self) -> ViewState<EngagementPanel> {
        match &self.status {
            LoadStatus::Loading => return ViewState::Loading,
            LoadStatus::Failed(msg) => return ViewState::Failed(msg.clone()),
            LoadStatus::Loaded => {}
        }

        if self.campaigns.is_empty() {
            let msg = if self.artist.is_wildcard() {
                "No campaigns found".to_string()
            } else {
                format!("No campaigns found for {}", artist_label(&self.artist))
            };
            return ViewState::Empty(msg);
        }

        let (heading, scope) = if self.artist.is_wildcard() {
            ("Campaigns".to_string(), "All artists".to_string())
        } else {
            let name = artist_label(&self.artist);
            (format!("Campaigns for {}", name), name)
        };

        ViewState::Ready(EngagementPanel {
            heading,
            scope,
            summary: summarize_engagement(&self.campaigns),
            campaigns: self.campaigns.clone(),
        })
    }
}

/// Rendered engagement metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementPanel {
    pub heading: String,
    /// Subtitle of the campaign count card.
    pub scope: String,
    pub summary: EngagementSummary,
    pub campaigns: Vec<EngagementCampaign>,
}

impl fmt::Display for EngagementPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Total Campaigns   {} ({})", s.campaign_count, self.scope)?;
        writeln!(
            f,
            "Avg Open Rate     {} (Email campaigns)",
            percent(s.average_open_rate, 1)
        )?;
        writeln!(
            f,
            "Total Audience    {} (All tiers combined)",
            thousands(s.total_audience)
        )?;
        writeln!(f, "Active Campaigns  {} (Currently running)", s.active_campaigns)?;

        write!(f, "{}", self.heading)?;
        for c in &self.campaigns {
            let email = &c.email_metrics;
            let sms = &c.sms_metrics;
            let tiers = &c.crm_tiers;
            write!(f, "\n  {} ({}) [{}]", c.name, c.artist, c.status)?;
            write!(
                f,
                "\n    Email: {}% open, {}% click, {}% bounce, {} sent",
                email.open_rate,
                email.click_rate,
                email.bounce_rate,
                thousands(email.total_sent)
            )?;
            write!(
                f,
                "\n    SMS: {}% delivered, {}% response, {}% opt-out, {} sent",
                sms.delivery_rate,
                sms.response_rate,
                sms.opt_out_rate,
                thousands(sms.total_sent)
            )?;
            write!(
                f,
                "\n    CRM: gold {}, silver {}, bronze {} ({} total)",
                thousands(tiers.gold),
                thousands(tiers.silver),
                thousands(tiers.bronze),
                thousands(tiers.total())
            )?;
        }
        Ok(())
    }
}
