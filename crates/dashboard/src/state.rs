//! View state and stale-response guarding.

use std::fmt;

/// What a view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    /// The last fetch failed. No retry is attempted.
    Failed(String),
    /// The fetch succeeded but nothing matched the selection.
    Empty(String),
    /// The selected campaign does not belong to the selected artist.
    InconsistentSelection(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(panel) => Some(panel),
            _ => None,
        }
    }

    /// Message shown instead of a panel, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(msg) | ViewState::Empty(msg) | ViewState::InconsistentSelection(msg) => {
                Some(msg)
            }
            ViewState::Loading | ViewState::Ready(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ViewState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Loading => f.write_str("Loading..."),
            ViewState::Failed(msg) => write!(f, "Failed to load metrics: {}", msg),
            ViewState::Empty(msg) => f.write_str(msg),
            ViewState::InconsistentSelection(msg) => write!(
                f,
                "No sales data available for the selected filters\n{}\nPlease select a different campaign or choose \"All Artists\".",
                msg
            ),
            ViewState::Ready(panel) => fmt::Display::fmt(panel, f),
        }
    }
}

/// Progress of a view's most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// A fetch issued for `selection`. Only the most recently issued ticket is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<S> {
    selection: S,
    generation: u64,
}

impl<S> FetchTicket<S> {
    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Issues fetch tickets with a monotonically increasing generation.
#[derive(Debug, Default)]
pub struct FetchTracker {
    latest: u64,
}

impl FetchTracker {
    pub fn issue<S>(&mut self, selection: S) -> FetchTicket<S> {
        self.latest += 1;
        FetchTicket {
            selection,
            generation: self.latest,
        }
    }

    /// True when `ticket` is the last one issued.
    pub fn is_current<S>(&self, ticket: &FetchTicket<S>) -> bool {
        ticket.generation == self.latest
    }
}
