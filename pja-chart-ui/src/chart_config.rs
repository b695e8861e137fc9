//! Pure builders for the two Chart.js configs.
//!
//! Kept free of DOM/bridge code so the shapes can be unit-tested natively.

use serde_json::{json, Value};

use pja_api::models::{DashboardStats, RaceDistribution};

/// Shared categorical palette for both charts.
pub const CHART_COLORS: [&str; 6] = [
    "#00796b", "#ffc107", "#1976d2", "#d32f2f", "#5e35b1", "#fdd835",
];

/// Fixed race/color category labels, in display order.
pub const RACE_LABELS: [&str; 5] = ["Parda", "Branca", "Indígena", "Preta", "Amarela"];

/// Counts aligned with [`RACE_LABELS`]; absent categories decode as 0, so
/// all five slices always render.
pub fn race_counts(race: &RaceDistribution) -> [u64; 5] {
    [race.parda, race.branca, race.indigena, race.preta, race.amarela]
}

/// Bar chart of the age-bracket distribution. Legend hidden: the axis
/// labels already name the brackets.
pub fn age_chart_config(stats: &DashboardStats) -> Value {
    let labels: Vec<&String> = stats.distribuicao_etaria.keys().collect();
    let values: Vec<u64> = stats.distribuicao_etaria.values().copied().collect();
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "População",
                "data": values,
                "backgroundColor": CHART_COLORS,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
        },
    })
}

/// Doughnut chart of the race/color distribution.
pub fn race_chart_config(stats: &DashboardStats) -> Value {
    json!({
        "type": "doughnut",
        "data": {
            "labels": RACE_LABELS,
            "datasets": [{
                "data": race_counts(&stats.distribuicao_raca),
                "backgroundColor": CHART_COLORS,
                "borderWidth": 2,
                "borderColor": "#fff",
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "right" } },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn stats(race: RaceDistribution) -> DashboardStats {
        let mut etaria = BTreeMap::new();
        etaria.insert("15 a 19".to_string(), 300u64);
        etaria.insert("20 a 24".to_string(), 200u64);
        etaria.insert("25 a 29".to_string(), 100u64);
        DashboardStats {
            total_jovens: 600,
            renda_media: 900.0,
            taxa_alfabetizacao_jovens: 88.0,
            distribuicao_etaria: etaria,
            distribuicao_raca: race,
        }
    }

    #[test]
    fn test_age_chart_labels_in_bracket_order() {
        let config = age_chart_config(&stats(RaceDistribution::default()));
        assert_eq!(config["type"], "bar");
        let labels = config["data"]["labels"].as_array().unwrap();
        assert_eq!(labels[0], "15 a 19");
        assert_eq!(labels[2], "25 a 29");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 300);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn test_race_chart_always_has_five_categories() {
        // Only two categories present in the payload; the rest default to 0.
        let race = RaceDistribution { parda: 7, branca: 3, ..Default::default() };
        let config = race_chart_config(&stats(race));
        assert_eq!(config["type"], "doughnut");
        let labels = config["data"]["labels"].as_array().unwrap();
        assert_eq!(labels.len(), 5);
        let data = config["data"]["datasets"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[0], 7); // Parda
        assert_eq!(data[2], 0); // Indígena missing -> 0
        assert_eq!(data[4], 0); // Amarela missing -> 0
    }

    #[test]
    fn test_race_counts_alignment() {
        let race = RaceDistribution { parda: 1, branca: 2, indigena: 3, preta: 4, amarela: 5 };
        assert_eq!(race_counts(&race), [1, 2, 3, 4, 5]);
    }
}
