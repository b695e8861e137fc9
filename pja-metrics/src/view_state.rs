//! The dashboard's single source of truth and its reducer.
//!
//! `ViewState` is an immutable snapshot of the three filter axes plus the
//! map-readiness flag. Mutations go through [`ViewState::apply`], which
//! returns the next snapshot together with the [`Refresh`] work the change
//! requires. The UI layer owns the one live copy (inside a signal) and
//! passes snapshots into fetch/render calls; no code reads ambient state.

use crate::age_group::AgeGroup;
use crate::metric::MetricId;

/// Geographic scope of the stats panel: the whole state or one municipality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Geral,
    Municipio(String),
}

impl Location {
    /// Qualifier appended to the mean-income KPI title.
    pub fn kpi_qualifier(&self) -> &'static str {
        match self {
            Location::Geral => "(Estado)",
            Location::Municipio(_) => "(Município)",
        }
    }

    /// Parse a filter select value; `"geral"` is the state-wide option.
    pub fn from_param(value: &str) -> Location {
        if value == "geral" {
            Location::Geral
        } else {
            Location::Municipio(value.to_string())
        }
    }
}

/// Snapshot of the current filter selections.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub location: Location,
    pub age_group: AgeGroup,
    pub map_metric: MetricId,
    /// Set once after the first successful map render, never cleared.
    pub map_ready: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            location: Location::Geral,
            age_group: AgeGroup::Geral,
            map_metric: MetricId::Vulnerabilidade,
            map_ready: false,
        }
    }
}

/// A user interaction (or the one-shot map-ready notification).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLocation(Location),
    SetAgeGroup(AgeGroup),
    SetMapMetric(MetricId),
    MapBecameReady,
}

/// Which fetch/render axes a state change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refresh {
    pub stats: bool,
    pub map_and_ranking: bool,
}

impl Refresh {
    pub const NONE: Refresh = Refresh { stats: false, map_and_ranking: false };
    pub const ALL: Refresh = Refresh { stats: true, map_and_ranking: true };
    pub const MAP_AND_RANKING: Refresh = Refresh { stats: false, map_and_ranking: true };
}

impl ViewState {
    /// Apply an action, returning the next snapshot and the refresh work
    /// it triggers. Location and age-group changes invalidate everything;
    /// a metric change only touches the map and the ranking (the stats
    /// panel is metric-independent). `MapBecameReady` is one-shot: once
    /// set, the flag never toggles back.
    pub fn apply(self, action: Action) -> (ViewState, Refresh) {
        match action {
            Action::SetLocation(location) => (ViewState { location, ..self }, Refresh::ALL),
            Action::SetAgeGroup(age_group) => (ViewState { age_group, ..self }, Refresh::ALL),
            Action::SetMapMetric(map_metric) => {
                (ViewState { map_metric, ..self }, Refresh::MAP_AND_RANKING)
            }
            Action::MapBecameReady => (ViewState { map_ready: true, ..self }, Refresh::NONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_change_refreshes_everything() {
        let state = ViewState::default();
        let (next, refresh) =
            state.apply(Action::SetLocation(Location::Municipio("MANAUS".into())));
        assert_eq!(next.location, Location::Municipio("MANAUS".into()));
        assert_eq!(refresh, Refresh::ALL);
    }

    #[test]
    fn test_age_change_refreshes_everything() {
        let state = ViewState::default();
        let (next, refresh) = state.apply(Action::SetAgeGroup(AgeGroup::From20To24));
        assert_eq!(next.age_group, AgeGroup::From20To24);
        assert!(refresh.stats);
        assert!(refresh.map_and_ranking);
    }

    #[test]
    fn test_metric_change_never_refreshes_stats() {
        let state = ViewState::default();
        let (next, refresh) = state.apply(Action::SetMapMetric(MetricId::Renda));
        assert_eq!(next.map_metric, MetricId::Renda);
        assert!(!refresh.stats);
        assert!(refresh.map_and_ranking);
    }

    #[test]
    fn test_map_ready_is_one_shot_and_refresh_free() {
        let state = ViewState::default();
        assert!(!state.map_ready);
        let (next, refresh) = state.apply(Action::MapBecameReady);
        assert!(next.map_ready);
        assert_eq!(refresh, Refresh::NONE);

        // Later axis changes keep the flag set.
        let (after, _) = next.apply(Action::SetAgeGroup(AgeGroup::From15To19));
        assert!(after.map_ready);
    }

    #[test]
    fn test_other_axes_are_untouched_by_metric_change() {
        let state = ViewState {
            location: Location::Municipio("TEFÉ".into()),
            age_group: AgeGroup::From25To29,
            ..ViewState::default()
        };
        let (next, _) = state.apply(Action::SetMapMetric(MetricId::Populacao));
        assert_eq!(next.location, Location::Municipio("TEFÉ".into()));
        assert_eq!(next.age_group, AgeGroup::From25To29);
    }

    #[test]
    fn test_location_param_parsing() {
        assert_eq!(Location::from_param("geral"), Location::Geral);
        assert_eq!(
            Location::from_param("COARI"),
            Location::Municipio("COARI".into())
        );
        assert_eq!(Location::Geral.kpi_qualifier(), "(Estado)");
        assert_eq!(
            Location::Municipio("COARI".into()).kpi_qualifier(),
            "(Município)"
        );
    }
}
