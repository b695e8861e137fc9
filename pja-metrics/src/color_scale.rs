//! Bucketed color scale for the choropleth map, and the matching legend.

use serde::Serialize;

use crate::format;
use crate::metric::MetricDefinition;

/// Fill color for features with no data for the active metric.
pub const NO_DATA_COLOR: &str = "#cccccc";

/// One legend row: a swatch color and its range label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// Map a value to its bucket color.
///
/// Thresholds are scanned from highest to lowest; the first threshold the
/// value strictly exceeds selects the bucket above it. A value exactly equal
/// to a threshold therefore lands in the lower bucket. `None` always maps
/// to [`NO_DATA_COLOR`].
pub fn color_for(value: Option<f64>, def: &MetricDefinition) -> &'static str {
    let Some(v) = value else {
        return NO_DATA_COLOR;
    };
    for i in (0..def.thresholds.len()).rev() {
        if v > def.thresholds[i] {
            return def.colors[i + 1];
        }
    }
    def.colors[0]
}

/// Legend rows for a metric, index-aligned with its color ramp.
///
/// Produces `thresholds.len() + 1` entries: `< t0`, the middle ranges
/// `t(i-1) – t(i)`, and `> t(last)`.
pub fn legend_entries(def: &MetricDefinition) -> Vec<LegendEntry> {
    let n = def.colors.len();
    let mut entries = Vec::with_capacity(n);
    for (i, color) in def.colors.iter().copied().enumerate() {
        let label = if i == 0 {
            format!("< {}", format::legend_number(def.thresholds[0]))
        } else if i == n - 1 {
            format!("> {}", format::legend_number(def.thresholds[i - 1]))
        } else {
            format!(
                "{} – {}",
                format::legend_number(def.thresholds[i - 1]),
                format::legend_number(def.thresholds[i])
            )
        };
        entries.push(LegendEntry { color, label });
    }
    entries
}
