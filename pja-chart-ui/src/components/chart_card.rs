//! Card wrapping one Chart.js canvas.

use dioxus::prelude::*;

/// Props for ChartCard
#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// DOM id of the canvas (Chart.js renders into this)
    pub canvas_id: String,
    /// Card heading
    pub title: String,
    /// Minimum height of the chart area in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A titled card holding the canvas a [`crate::js_bridge::ChartSlot`]
/// draws into.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let style = format!("position: relative; height: {}px;", props.min_height);

    rsx! {
        div {
            class: "card chart-card",
            h3 { "{props.title}" }
            div {
                style: "{style}",
                canvas { id: "{props.canvas_id}" }
            }
        }
    }
}
