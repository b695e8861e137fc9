//! Domain core for the Painel da Juventude dashboard.
//!
//! Everything in this crate is pure and browser-free: the metric catalog,
//! the choropleth color scale, pt-BR number formatting, the view-state
//! reducer, and the seasonal banner configuration. The UI crates consume
//! these types; nothing here touches the DOM or the network.

pub mod age_group;
pub mod color_scale;
pub mod format;
pub mod metric;
pub mod seasonal;
pub mod view_state;

pub use age_group::AgeGroup;
pub use metric::{MetricDefinition, MetricId, UnknownMetric};
pub use view_state::{Action, Location, Refresh, ViewState};
