//! Painel da Juventude do Amazonas
//!
//! Browser dashboard over pre-aggregated demographic and vulnerability
//! statistics per municipality. All aggregation happens in the data
//! service; this app fetches JSON/GeoJSON and paints four widget groups:
//! KPI cards, two charts, the choropleth map with its legend, and the
//! top/bottom-five ranking.
//!
//! Data flow:
//! 1. On mount: initialize the JS interop and the Leaflet map, load the
//!    municipality list, and run a full refresh.
//! 2. A filter change goes through the `ViewState` reducer, which says
//!    which axes to refresh (location/age invalidate everything, the map
//!    metric only the map and ranking).
//! 3. Each refresh carries a sequence ticket; a response that is no longer
//!    the latest issued for its axis is dropped, so late completions never
//!    overwrite fresher data.

use dioxus::prelude::*;

use pja_api::{ApiClient, FetchError};
use pja_chart_ui::components::{
    AgeGroupSelector, ChartCard, ErrorDisplay, KpiCards, MapCard, MetricSelector,
    MunicipioSelector, RankingCard, SeasonalBanner,
};
use pja_chart_ui::js_bridge::{self, ChartSlot};
use pja_chart_ui::state::{AppState, RankingPanel};
use pja_chart_ui::{chart_config, map_render};
use pja_metrics::seasonal::SeasonalConfig;
use pja_metrics::{color_scale, Action, ViewState};

/// DOM id for the Leaflet container div.
const MAP_CONTAINER_ID: &str = "map";

/// The two chart slots; each refresh destroys and rebuilds its instance.
const AGE_CHART: ChartSlot = ChartSlot::new("age-distribution-chart");
const RACE_CHART: ChartSlot = ChartSlot::new("race-distribution-chart");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("painel-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = ApiClient::new("");

    // ─── Mount: interop, map, municipality list, first full refresh ───
    let mount_client = client.clone();
    use_effect(move || {
        js_bridge::init_interop();
        js_bridge::init_map(MAP_CONTAINER_ID);

        let client = mount_client.clone();
        spawn(async move {
            match client.fetch_municipios().await {
                Ok(list) => state.municipios.set(list),
                Err(err) => {
                    log::error!("lista de municípios indisponível: {err}");
                    state
                        .error_msg
                        .set(Some("não foi possível carregar a lista de municípios".into()));
                }
            }
        });

        let view = state.view.peek().clone();
        refresh_stats(state, mount_client.clone(), view.clone());
        refresh_map_and_ranking(state, mount_client.clone(), view);
    });

    // ─── Charts: rebuild both whenever fresh stats land ───
    use_effect(move || {
        let Some(stats) = state.stats.read().clone() else {
            return;
        };
        AGE_CHART.replace(&chart_config::age_chart_config(&stats).to_string());
        RACE_CHART.replace(&chart_config::race_chart_config(&stats).to_string());
    });

    // ─── Event wiring: reducer first, then the refreshes it asks for ───
    let on_action = use_callback(move |action: Action| {
        let (next, refresh) = state.view.peek().clone().apply(action);
        state.view.set(next.clone());
        if refresh.stats {
            refresh_stats(state, client.clone(), next.clone());
        }
        if refresh.map_and_ranking {
            refresh_map_and_ranking(state, client.clone(), next);
        }
    });

    rsx! {
        div {
            class: "app",
            header {
                h1 { "Painel da Juventude do Amazonas" }
                p {
                    class: "subtitle",
                    "Vulnerabilidade, renda e alfabetização dos jovens por município"
                }
            }

            if let Some(message) = state.error_msg.read().clone() {
                ErrorDisplay { message }
            }

            div {
                class: "filter-bar",
                MunicipioSelector { on_action }
                AgeGroupSelector { on_action }
                MetricSelector { on_action }
            }

            SeasonalBanner { config: SeasonalConfig::default() }

            KpiCards {}

            div {
                class: "charts-row",
                ChartCard {
                    canvas_id: AGE_CHART.canvas_id().to_string(),
                    title: "Distribuição por Faixa Etária".to_string(),
                }
                ChartCard {
                    canvas_id: RACE_CHART.canvas_id().to_string(),
                    title: "Distribuição por Raça/Cor".to_string(),
                }
            }

            div {
                class: "map-row",
                MapCard { container_id: MAP_CONTAINER_ID.to_string() }
                RankingCard {}
            }
        }
    }
}

/// Where a completed fetch goes: rendered, silently dropped, or a failure
/// that keeps whatever is already on screen.
#[derive(Debug, PartialEq)]
enum FetchOutcome<T> {
    /// Success and still the latest issued for its axis.
    Render(T),
    /// Success, but a newer fetch was issued meanwhile.
    Discard,
    /// Failure; the previous render stays.
    KeepPrevious(FetchError),
}

/// Classify a completed fetch against its sequence ticket. Rendering is
/// only ever reachable through `Render`, so a failed or superseded
/// response can never touch the widgets.
fn resolve_fetch<T>(result: Result<T, FetchError>, is_current: bool) -> FetchOutcome<T> {
    match result {
        Ok(payload) if is_current => FetchOutcome::Render(payload),
        Ok(_) => FetchOutcome::Discard,
        Err(err) => FetchOutcome::KeepPrevious(err),
    }
}

/// Refresh the KPI cards and charts. On failure the previous stats stay
/// rendered; only the log records the miss.
fn refresh_stats(mut state: AppState, client: ApiClient, view: ViewState) {
    let ticket = state.issue_stats_fetch();
    spawn(async move {
        let result = client.fetch_stats(&view.location, view.age_group).await;
        match resolve_fetch(result, state.stats_fetch_is_current(ticket)) {
            FetchOutcome::Render(stats) => state.stats.set(Some(stats)),
            FetchOutcome::Discard => {
                log::info!("descartando resposta de stats superada (ticket {ticket})")
            }
            FetchOutcome::KeepPrevious(err) => {
                log::error!("falha ao buscar dados do painel: {err}")
            }
        }
    });
}

/// Refresh the choropleth, the legend and the ranking card.
///
/// The map fetch is age-group-dependent but metric-independent; the active
/// metric is applied per feature at render time. A failed map fetch leaves
/// the previous layer untouched; a failed ranking fetch swaps the ranking
/// card content for an inline error.
fn refresh_map_and_ranking(mut state: AppState, client: ApiClient, view: ViewState) {
    let ticket = state.issue_map_fetch();
    state.ranking.set(RankingPanel::Loading);
    spawn(async move {
        let result = client.fetch_map(view.age_group).await;
        match resolve_fetch(result, state.map_fetch_is_current(ticket)) {
            FetchOutcome::Render(collection) => {
                let payload = map_render::map_payload(&collection, view.map_metric);
                js_bridge::set_map_data(MAP_CONTAINER_ID, &payload.to_string());

                let def = view.map_metric.def();
                let entries = color_scale::legend_entries(def);
                match serde_json::to_string(&entries) {
                    Ok(json) => {
                        js_bridge::set_legend(MAP_CONTAINER_ID, def.legend_title, &json)
                    }
                    Err(err) => log::error!("legenda não serializável: {err}"),
                }

                if !state.view.peek().map_ready {
                    js_bridge::invalidate_map_size(MAP_CONTAINER_ID);
                    let (next, _) = state.view.peek().clone().apply(Action::MapBecameReady);
                    state.view.set(next);
                }
            }
            FetchOutcome::Discard => {
                log::info!("descartando resposta de mapa superada (ticket {ticket})")
            }
            FetchOutcome::KeepPrevious(err) => log::error!("falha ao atualizar o mapa: {err}"),
        }

        let result = client.fetch_ranking(view.map_metric, view.age_group).await;
        match resolve_fetch(result, state.map_fetch_is_current(ticket)) {
            FetchOutcome::Render(ranking) => state.ranking.set(RankingPanel::Ready(ranking)),
            FetchOutcome::Discard => {}
            FetchOutcome::KeepPrevious(err) => {
                log::error!("falha ao carregar ranking: {err}");
                // The ranking card is the one widget that swaps in an
                // inline error instead of keeping stale content.
                if state.map_fetch_is_current(ticket) {
                    state.ranking.set(RankingPanel::Failed);
                }
            }
        }
    });
}
