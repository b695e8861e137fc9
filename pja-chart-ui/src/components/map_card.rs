//! Card holding the Leaflet map container.

use dioxus::prelude::*;

/// Props for MapCard
#[derive(Props, Clone, PartialEq)]
pub struct MapCardProps {
    /// DOM id Leaflet mounts into
    pub container_id: String,
    #[props(default = 500)]
    pub height: u32,
}

/// The choropleth map container. Leaflet owns everything inside the div;
/// the legend control is added and rebuilt by the JS glue.
#[component]
pub fn MapCard(props: MapCardProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            class: "card map-card",
            h3 { "Mapa por Município" }
            div {
                id: "{props.container_id}",
                style: "{style}",
            }
        }
    }
}
