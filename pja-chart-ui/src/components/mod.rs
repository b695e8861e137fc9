//! Reusable Dioxus RSX components for the youth panel.

mod chart_card;
mod error_display;
mod filter_bar;
mod kpi_cards;
mod loading_spinner;
mod map_card;
mod ranking_card;
mod seasonal_banner;

pub use chart_card::ChartCard;
pub use error_display::ErrorDisplay;
pub use filter_bar::{AgeGroupSelector, MetricSelector, MunicipioSelector};
pub use kpi_cards::KpiCards;
pub use loading_spinner::LoadingSpinner;
pub use map_card::MapCard;
pub use ranking_card::RankingCard;
pub use seasonal_banner::SeasonalBanner;
