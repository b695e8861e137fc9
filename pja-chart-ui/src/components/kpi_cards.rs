//! The three headline KPI cards.

use dioxus::prelude::*;

use pja_metrics::format;

use super::LoadingSpinner;
use crate::state::AppState;

/// Total youths, mean income and literacy rate for the current selection.
/// Stateless: given the same stats and view it always renders the same
/// cards. Titles carry the age-group / location qualifiers. Until the
/// first stats payload lands the grid shows the loading indicator.
#[component]
pub fn KpiCards() -> Element {
    let state = use_context::<AppState>();
    let view = state.view.read().clone();
    let Some(stats) = state.stats.read().clone() else {
        return rsx! { LoadingSpinner {} };
    };

    let age_label = view.age_group.kpi_qualifier();
    let location_label = view.location.kpi_qualifier();

    let total = format::grouped_int(stats.total_jovens as f64);
    let renda = format::grouped_decimal(stats.renda_media, 2);
    let alfabetizacao = format!("{:.1}", stats.taxa_alfabetizacao_jovens);

    rsx! {
        div {
            class: "kpi-grid",
            div {
                class: "kpi-card",
                id: "kpi-total-jovens",
                h3 { "Total de Jovens {age_label}" }
                p { class: "kpi-number", "{total}" }
            }
            div {
                class: "kpi-card",
                id: "kpi-renda-media",
                h3 { "Renda Média {location_label}" }
                p { class: "kpi-number", "{renda}" }
            }
            div {
                class: "kpi-card",
                id: "kpi-taxa-alfabetizacao",
                h3 { "Taxa de Alfabetização {age_label}" }
                p { class: "kpi-number", "{alfabetizacao}" }
            }
        }
    }
}
