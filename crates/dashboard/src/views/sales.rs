//! Bottom-of-funnel sales view.
//!
//! The full campaign list is fetched once and every selection change is
//! filtered client-side.

use std::fmt;

use domain::models::{ArtistRef, CampaignSelector, SalesCampaign};
use domain::services::{
    campaigns_for_artist, filter_campaigns, is_consistent_selection, summarize_sales,
    CampaignFilter, SalesSummary, UnknownArtistPolicy,
};
use shared::format::{count_noun, currency, percent, thousands, whole_dollars};
use tracing::{debug, error};

use super::{artist_label, artist_options, SelectOption};
use crate::client::{ClientError, MetricsSource};
use crate::state::{FetchTicket, FetchTracker, LoadStatus, ViewState};

/// Sales view state.
#[derive(Debug, Default)]
pub struct SalesView {
    artist: ArtistRef,
    campaign: CampaignSelector,
    campaigns: Vec<SalesCampaign>,
    status: LoadStatus,
    tracker: FetchTracker,
}

impl SalesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artist(&self) -> &ArtistRef {
        &self.artist
    }

    pub fn campaign(&self) -> &CampaignSelector {
        &self.campaign
    }

    /// Marks the view as loading and issues a ticket for the full campaign list.
    pub fn begin_load(&mut self) -> FetchTicket<()> {
        self.status = LoadStatus::Loading;
        self.tracker.issue(())
    }

    /// Applies a fetch result. Returns false if a newer load superseded `ticket`.
    pub fn complete_load(
        &mut self,
        ticket: FetchTicket<()>,
        result: Result<Vec<SalesCampaign>, ClientError>,
    ) -> bool {
        if !self.tracker.is_current(&ticket) {
            debug!(
                view = "sales",
                generation = ticket.generation(),
                "Discarding stale response"
            );
            return false;
        }

        match result {
            Ok(campaigns) => {
                debug!(view = "sales", campaigns = campaigns.len(), "Campaigns loaded");
                self.campaigns = campaigns;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                error!(view = "sales", error = %e, "Failed to fetch sales metrics");
                self.campaigns.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Fetches every campaign from `source`.
    pub async fn load<M>(&mut self, source: &M)
    where
        M: MetricsSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.sales(&ArtistRef::All, &CampaignSelector::All).await;
        self.complete_load(ticket, result);
    }

    /// Selects an artist and moves the campaign selection to that artist's first
    /// campaign, or back to all campaigns when there is none.
    pub fn select_artist(&mut self, artist: ArtistRef) {
        self.campaign = if artist.is_wildcard() {
            CampaignSelector::All
        } else {
            campaigns_for_artist(&self.campaigns, &artist)
                .first()
                .map(|c| CampaignSelector::Id(c.id.clone()))
                .unwrap_or_default()
        };
        self.artist = artist;
    }

    /// Selects a campaign without touching the artist.
    pub fn select_campaign(&mut self, campaign: CampaignSelector) {
        self.campaign = campaign;
    }

    /// Campaigns matching the current selection. Unknown artists match nothing.
    pub fn visible_campaigns(&self) -> Vec<SalesCampaign> {
        let filter = CampaignFilter::new(self.artist.clone(), self.campaign.clone());
        filter_campaigns(&self.campaigns, &filter, UnknownArtistPolicy::MatchNone)
            .unwrap_or_default()
    }

    pub fn artist_options(&self) -> Vec<SelectOption> {
        artist_options(true)
    }

    /// Campaign dropdown. Always lists every campaign regardless of the artist.
    pub fn campaign_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::new(CampaignSelector::All.as_id(), "All Campaigns"))
            .chain(
                self.campaigns
                    .iter()
                    .map(|c| SelectOption::new(c.id.as_str(), c.label())),
            )
            .collect()
    }

    fn campaign_label(&self) -> String {
        match &self.campaign {
            CampaignSelector::All => "All Campaigns".to_string(),
            CampaignSelector::Id(id) => self
                .campaigns
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.clone()),
        }
    }

    pub fn state(&self) -> ViewState<SalesPanel> {
        match &self.status {
            LoadStatus::Loading => return ViewState::Loading,
            LoadStatus::Failed(msg) => return ViewState::Failed(msg.clone()),
            LoadStatus::Loaded => {}
        }

        let visible = self.visible_campaigns();
        if visible.is_empty() {
            if !is_consistent_selection(&self.artist, &self.campaign, &self.campaigns) {
                return ViewState::InconsistentSelection(format!(
                    "Campaign \"{}\" does not belong to artist \"{}\".",
                    self.campaign_label(),
                    artist_label(&self.artist)
                ));
            }
            return ViewState::Empty("No campaigns found".to_string());
        }

        let summary = summarize_sales(&visible);
        let showing = format!(
            "Showing: {} • {} • {}",
            artist_label(&self.artist),
            self.campaign_label(),
            count_noun(summary.campaign_count, "campaign")
        );

        ViewState::Ready(SalesPanel {
            showing,
            summary,
            campaigns: visible,
        })
    }
}

/// Rendered sales metrics for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesPanel {
    pub showing: String,
    pub summary: SalesSummary,
    pub campaigns: Vec<SalesCampaign>,
}

impl fmt::Display for SalesPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "{}", self.showing)?;
        writeln!(f, "Total Revenue        {}", currency(s.total_revenue))?;
        writeln!(f, "Total Orders         {}", thousands(s.total_orders))?;
        writeln!(f, "Avg Conversion Rate  {}", percent(s.average_conversion_rate, 1))?;
        writeln!(f, "Avg Order Value      {}", whole_dollars(s.average_order_value))?;

        writeln!(f, "Revenue Breakdown by Platform")?;
        for share in &s.shares {
            writeln!(
                f,
                "  {:<12}{:>10}  {}",
                share.source.display_name(),
                currency(share.revenue),
                percent(share.percentage, 1)
            )?;
        }

        write!(f, "Campaigns")?;
        for c in &self.campaigns {
            let m = &c.sales_metrics;
            write!(
                f,
                "\n  {} [{}] {} revenue, {} orders, {} conversion, {} AOV",
                c.label(),
                c.status,
                currency(m.total_revenue),
                thousands(m.total_orders),
                percent(m.conversion_rate, 1),
                currency(m.average_order_value)
            )?;
        }
        Ok(())
    }
}
