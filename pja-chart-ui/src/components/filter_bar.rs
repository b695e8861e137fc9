//! The three filter dropdowns: location, age group and map metric.
//!
//! Selectors read their current value and option lists from `AppState`,
//! but never mutate it directly: every change is emitted as an [`Action`]
//! so the app layer can run the reducer and trigger the right refreshes.

use dioxus::prelude::*;

use pja_metrics::{format, Action, AgeGroup, Location, MetricId};

use crate::state::AppState;

/// Location dropdown: the whole state, or one municipality by id.
#[component]
pub fn MunicipioSelector(on_action: EventHandler<Action>) -> Element {
    let state = use_context::<AppState>();
    let municipios = state.municipios.read().clone();
    let selected = match &state.view.read().location {
        Location::Geral => "geral".to_string(),
        Location::Municipio(id) => id.clone(),
    };

    let on_change = move |evt: Event<FormData>| {
        on_action.call(Action::SetLocation(Location::from_param(&evt.value())));
    };

    rsx! {
        div {
            class: "filter",
            label {
                r#for: "municipio-select",
                "Localidade: "
            }
            select {
                id: "municipio-select",
                onchange: on_change,
                option {
                    value: "geral",
                    selected: selected == "geral",
                    "Amazonas (Estado)"
                }
                for municipio in municipios.iter() {
                    option {
                        value: "{municipio}",
                        selected: *municipio == selected,
                        "{format::display_municipio(municipio)}"
                    }
                }
            }
        }
    }
}

/// Age bracket dropdown.
#[component]
pub fn AgeGroupSelector(on_action: EventHandler<Action>) -> Element {
    let state = use_context::<AppState>();
    let selected = state.view.read().age_group;

    let on_change = move |evt: Event<FormData>| {
        if let Some(group) = AgeGroup::from_param(&evt.value()) {
            on_action.call(Action::SetAgeGroup(group));
        }
    };

    rsx! {
        div {
            class: "filter",
            label {
                r#for: "age-select",
                "Faixa etária: "
            }
            select {
                id: "age-select",
                onchange: on_change,
                for group in AgeGroup::ALL {
                    option {
                        value: "{group.as_param()}",
                        selected: group == selected,
                        "{group.display_label()}"
                    }
                }
            }
        }
    }
}

/// Map metric dropdown. Changing it refreshes the map and the ranking
/// only; the stats panel doesn't depend on the metric.
#[component]
pub fn MetricSelector(on_action: EventHandler<Action>) -> Element {
    let state = use_context::<AppState>();
    let selected = state.view.read().map_metric;

    let on_change = move |evt: Event<FormData>| {
        match MetricId::from_param(&evt.value()) {
            Ok(metric) => on_action.call(Action::SetMapMetric(metric)),
            Err(err) => log::error!("seletor de métrica: {err}"),
        }
    };

    rsx! {
        div {
            class: "filter",
            label {
                r#for: "map-metric-select",
                "Métrica do mapa: "
            }
            select {
                id: "map-metric-select",
                onchange: on_change,
                for metric in MetricId::ALL {
                    option {
                        value: "{metric.as_param()}",
                        selected: metric == selected,
                        "{metric.def().label}"
                    }
                }
            }
        }
    }
}
