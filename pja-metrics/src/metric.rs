//! Static catalog of the metrics displayable on the choropleth map.
//!
//! Each metric carries the GeoJSON property it reads, display labels,
//! the bucket thresholds and color ramp for the map, and a value
//! formatter. The catalog is fixed at compile time.

use thiserror::Error;

use crate::format;

/// Selecting a metric key that is not registered in the catalog.
/// This is a programming / wiring error, not a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("métrica desconhecida: {0}")]
pub struct UnknownMetric(pub String);

/// Identifier of a registered map metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    Vulnerabilidade,
    Renda,
    Alfabetizacao,
    Populacao,
}

/// Everything the map, legend, popup and ranking need to render one metric.
pub struct MetricDefinition {
    /// GeoJSON feature property holding this metric's value.
    pub value_field: &'static str,
    /// Short display label (popups, ranking heading).
    pub label: &'static str,
    /// Legend heading, including the unit.
    pub legend_title: &'static str,
    /// Ascending bucket cut points; `colors` has one more entry.
    pub thresholds: &'static [f64],
    /// Bucket colors, index-aligned with legend entries.
    pub colors: &'static [&'static str],
    /// Value formatter; `None` renders as "N/A".
    pub formatter: fn(Option<f64>) -> String,
}

fn fmt_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "N/A".to_string(),
    }
}

fn fmt_renda(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("R$ {}", format::grouped_int(v)),
        None => "N/A".to_string(),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "N/A".to_string(),
    }
}

fn fmt_count(value: Option<f64>) -> String {
    match value {
        Some(v) => format::grouped_int(v),
        None => "N/A".to_string(),
    }
}

static VULNERABILIDADE: MetricDefinition = MetricDefinition {
    value_field: "vul_score_final",
    label: "Score de Vulnerabilidade",
    legend_title: "Score de Vulnerabilidade",
    thresholds: &[0.48, 0.50, 0.52, 0.55],
    colors: &["#a5d6a7", "#fff59d", "#ffc107", "#ffa000", "#d32f2f"],
    formatter: fmt_score,
};

static RENDA: MetricDefinition = MetricDefinition {
    value_field: "renda_media_final",
    label: "Renda Média",
    legend_title: "Renda Média (R$)",
    thresholds: &[800.0, 1000.0, 1200.0, 1500.0],
    // Red ramp reversed: low income is the dark end.
    colors: &["#a50f15", "#de2d26", "#fb6a4a", "#fcae91", "#fee5d9"],
    formatter: fmt_renda,
};

static ALFABETIZACAO: MetricDefinition = MetricDefinition {
    value_field: "taxa_alfabetizacao_jovens",
    label: "Taxa de Alfabetização",
    legend_title: "Taxa de Alfabetização (%)",
    thresholds: &[80.0, 85.0, 90.0, 95.0],
    colors: &["#a50f15", "#de2d26", "#fb6a4a", "#fcae91", "#fee5d9"],
    formatter: fmt_percent,
};

static POPULACAO: MetricDefinition = MetricDefinition {
    value_field: "total_jovens",
    label: "População Jovem",
    legend_title: "Nº de Jovens",
    thresholds: &[1000.0, 5000.0, 10000.0, 50000.0],
    colors: &["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"],
    formatter: fmt_count,
};

impl MetricId {
    /// Every registered metric, in catalog order.
    pub const ALL: [MetricId; 4] = [
        MetricId::Vulnerabilidade,
        MetricId::Renda,
        MetricId::Alfabetizacao,
        MetricId::Populacao,
    ];

    /// The metric's definition. Infallible: every variant is registered.
    pub fn def(self) -> &'static MetricDefinition {
        match self {
            MetricId::Vulnerabilidade => &VULNERABILIDADE,
            MetricId::Renda => &RENDA,
            MetricId::Alfabetizacao => &ALFABETIZACAO,
            MetricId::Populacao => &POPULACAO,
        }
    }

    /// Key used in API paths and select option values.
    pub fn as_param(self) -> &'static str {
        match self {
            MetricId::Vulnerabilidade => "vulnerabilidade",
            MetricId::Renda => "renda",
            MetricId::Alfabetizacao => "alfabetizacao",
            MetricId::Populacao => "populacao",
        }
    }

    /// Parse a metric key coming from a select element or URL.
    pub fn from_param(value: &str) -> Result<MetricId, UnknownMetric> {
        MetricId::ALL
            .into_iter()
            .find(|m| m.as_param() == value)
            .ok_or_else(|| UnknownMetric(value.to_string()))
    }

    /// Whether a lower value is the better outcome for this metric.
    /// Only the vulnerability score inverts; everything else reads
    /// "higher is better".
    pub fn lower_is_better(self) -> bool {
        matches!(self, MetricId::Vulnerabilidade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_metric_has_aligned_ramp() {
        for id in MetricId::ALL {
            let def = id.def();
            assert_eq!(def.colors.len(), def.thresholds.len() + 1);
            let mut sorted = def.thresholds.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(sorted, def.thresholds, "thresholds must be ascending");
        }
    }

    #[test]
    fn test_from_param_round_trips() {
        for id in MetricId::ALL {
            assert_eq!(MetricId::from_param(id.as_param()), Ok(id));
        }
    }

    #[test]
    fn test_from_param_rejects_unregistered_key() {
        let err = MetricId::from_param("idh").unwrap_err();
        assert_eq!(err, UnknownMetric("idh".to_string()));
    }

    #[test]
    fn test_direction_exception_is_vulnerability_only() {
        assert!(MetricId::Vulnerabilidade.lower_is_better());
        assert!(!MetricId::Renda.lower_is_better());
        assert!(!MetricId::Alfabetizacao.lower_is_better());
        assert!(!MetricId::Populacao.lower_is_better());
    }

    #[test]
    fn test_formatters() {
        let fmt = MetricId::Vulnerabilidade.def().formatter;
        assert_eq!(fmt(Some(0.51)), "0.510");
        assert_eq!(fmt(None), "N/A");

        let fmt = MetricId::Renda.def().formatter;
        assert_eq!(fmt(Some(1234.56)), "R$ 1.235");

        let fmt = MetricId::Alfabetizacao.def().formatter;
        assert_eq!(fmt(Some(85.34)), "85.3%");

        let fmt = MetricId::Populacao.def().formatter;
        assert_eq!(fmt(Some(50000.0)), "50.000");
    }
}
