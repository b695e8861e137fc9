//! Seasonal campaign highlight.

use dioxus::prelude::*;

use pja_metrics::seasonal::SeasonalConfig;

/// Props for SeasonalBanner
#[derive(Props, Clone, PartialEq)]
pub struct SeasonalBannerProps {
    pub config: SeasonalConfig,
}

/// Campaign banner shown only during the configured months.
#[component]
pub fn SeasonalBanner(props: SeasonalBannerProps) -> Element {
    if !props.config.is_active_now() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "card seasonal-highlight",
            id: "seasonal-highlight-section",
            h3 { "Mês da Juventude" }
            p {
                "Junho é o mês de mobilização pelas políticas públicas de "
                "juventude no Amazonas. Explore os dados do seu município."
            }
        }
    }
}
