//! Loading indicator shown while the first payloads arrive.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 32px; color: #666;",
            "Carregando dados..."
        }
    }
}
