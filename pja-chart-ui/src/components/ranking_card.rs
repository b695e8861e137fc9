//! Top/bottom-five ranking card.
//!
//! The server pre-sorts both lists for the selected metric; the client
//! only decides which list carries the "best" heading. For metrics where
//! lower is better (the vulnerability score) `top_5` holds the lowest
//! values; for every other metric the headings invert.

use dioxus::prelude::*;

use pja_api::models::RankingEntry;
use pja_metrics::format;

use crate::state::{AppState, RankingPanel};

#[component]
pub fn RankingCard() -> Element {
    let state = use_context::<AppState>();
    let metric = state.view.read().map_metric;
    let def = metric.def();
    let panel = state.ranking.read().clone();

    let (best_label, worst_label) = if metric.lower_is_better() {
        ("Menores Índices", "Maiores Índices")
    } else {
        ("Maiores Índices", "Menores Índices")
    };

    let content = match panel {
        RankingPanel::Loading => rsx! {
            p { class: "ranking-loading", "Carregando..." }
        },
        RankingPanel::Failed => rsx! {
            p {
                class: "ranking-error",
                "Não foi possível carregar os dados."
            }
        },
        RankingPanel::Ready(ranking) => rsx! {
            RankingList {
                heading: best_label,
                entries: ranking.top_5.clone(),
                metric,
            }
            RankingList {
                heading: worst_label,
                entries: ranking.bottom_5.clone(),
                metric,
            }
        },
    };

    rsx! {
        div {
            class: "card ranking-card",
            h3 {
                id: "ranking-title",
                "Destaques por {def.label}"
            }
            div {
                id: "ranking-content",
                {content}
            }
        }
    }
}

/// One of the two ranked lists inside the card.
#[component]
fn RankingList(
    heading: &'static str,
    entries: Vec<RankingEntry>,
    metric: pja_metrics::MetricId,
) -> Element {
    let formatter = metric.def().formatter;

    rsx! {
        ul {
            class: "ranking-list",
            h4 { "{heading}" }
            for entry in entries.iter() {
                li {
                    span {
                        class: "municipio-name",
                        "{format::display_municipio(&entry.municipio)}"
                    }
                    span {
                        class: "municipio-value",
                        "{formatter(entry.value)}"
                    }
                }
            }
        }
    }
}
