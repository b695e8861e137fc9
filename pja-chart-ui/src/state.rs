//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! The two sequence counters close the unordered-completion hazard: each
//! fetch captures the counter value at issue time and discards its result
//! if a newer fetch was issued for the same axis before it resolved.

use dioxus::prelude::*;

use pja_api::models::{DashboardStats, Ranking};
use pja_metrics::ViewState;

/// What the ranking card is currently showing. Unlike the other widgets,
/// a failed ranking fetch replaces the content with an inline error line;
/// the failure details go to the log, not the card.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RankingPanel {
    #[default]
    Loading,
    Ready(Ranking),
    Failed,
}

/// Shared application state for the panel.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The three filter axes plus the map-readiness flag
    pub view: Signal<ViewState>,
    /// Municipality ids for the location filter (empty until loaded)
    pub municipios: Signal<Vec<String>>,
    /// Banner-level error message (e.g. the municipality list failed)
    pub error_msg: Signal<Option<String>>,
    /// Latest successfully fetched stats; kept on fetch failure
    pub stats: Signal<Option<DashboardStats>>,
    /// Ranking card content
    pub ranking: Signal<RankingPanel>,
    /// Issue counter for the stats axis
    pub stats_seq: Signal<u64>,
    /// Issue counter for the map+ranking axis
    pub map_seq: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewState::default()),
            municipios: Signal::new(Vec::new()),
            error_msg: Signal::new(None),
            stats: Signal::new(None),
            ranking: Signal::new(RankingPanel::Loading),
            stats_seq: Signal::new(0),
            map_seq: Signal::new(0),
        }
    }

    /// Issue a new stats fetch: bump the counter and return the ticket the
    /// fetch must still hold when it completes.
    pub fn issue_stats_fetch(&mut self) -> u64 {
        let next = *self.stats_seq.peek() + 1;
        self.stats_seq.set(next);
        next
    }

    /// Same, for the map+ranking axis.
    pub fn issue_map_fetch(&mut self) -> u64 {
        let next = *self.map_seq.peek() + 1;
        self.map_seq.set(next);
        next
    }

    /// Whether a completed stats fetch is still the latest issued.
    pub fn stats_fetch_is_current(&self, ticket: u64) -> bool {
        *self.stats_seq.peek() == ticket
    }

    pub fn map_fetch_is_current(&self, ticket: u64) -> bool {
        *self.map_seq.peek() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::RankingPanel;

    #[test]
    fn test_ranking_panel_starts_loading() {
        assert_eq!(RankingPanel::default(), RankingPanel::Loading);
    }
}
