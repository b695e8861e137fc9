//! Deserialization structs for the API payloads.
//!
//! `FeatureCollection` also derives `Serialize` so the map renderer can
//! hand decorated GeoJSON back to Leaflet as a JSON string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Youth counts per race/color category.
///
/// Exactly five categories exist; a category missing from the response
/// means zero people, so every field defaults. The doughnut chart always
/// renders all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct RaceDistribution {
    #[serde(default)]
    pub parda: u64,
    #[serde(default)]
    pub branca: u64,
    #[serde(default)]
    pub indigena: u64,
    #[serde(default)]
    pub preta: u64,
    #[serde(default)]
    pub amarela: u64,
}

/// KPI and chart data for the state or one municipality.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_jovens: u64,
    pub renda_media: f64,
    pub taxa_alfabetizacao_jovens: f64,
    /// Age-bracket label ("15 a 19", ...) to population count. The labels
    /// sort lexicographically in bracket order, so a BTreeMap keeps the
    /// bar chart's x-axis stable.
    pub distribuicao_etaria: BTreeMap<String, u64>,
    #[serde(default)]
    pub distribuicao_raca: RaceDistribution,
}

/// One municipality polygon with its per-metric values.
///
/// `properties` stays an untyped map: the map renderer looks values up by
/// each metric's `value_field`, and any of them may be null or absent for
/// municipalities without data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub geometry: Value,
    pub properties: serde_json::Map<String, Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// The `/api/mapa` payload: every municipality polygon, all metric fields
/// present per feature (the active metric is a render-time choice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

/// One row of the ranking card. `value` is null for municipalities the
/// server could not score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingEntry {
    pub municipio: String,
    pub value: Option<f64>,
}

/// Server-sorted ranking for the selected metric and age group. The client
/// never re-sorts; it only decides which list gets the "best" label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ranking {
    pub top_5: Vec<RankingEntry>,
    pub bottom_5: Vec<RankingEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dashboard_stats() {
        let json = r#"{
            "total_jovens": 123456,
            "renda_media": 987.65,
            "taxa_alfabetizacao_jovens": 91.2,
            "distribuicao_etaria": {"15 a 19": 50000, "20 a 24": 40000, "25 a 29": 33456},
            "distribuicao_raca": {"parda": 80000, "branca": 30000, "indigena": 9000, "preta": 4000, "amarela": 456}
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_jovens, 123456);
        assert_eq!(stats.distribuicao_etaria.len(), 3);
        // BTreeMap iteration keeps bracket order
        let labels: Vec<&String> = stats.distribuicao_etaria.keys().collect();
        assert_eq!(labels, ["15 a 19", "20 a 24", "25 a 29"]);
        assert_eq!(stats.distribuicao_raca.parda, 80000);
    }

    #[test]
    fn test_missing_race_category_defaults_to_zero() {
        let json = r#"{
            "total_jovens": 10,
            "renda_media": 1.0,
            "taxa_alfabetizacao_jovens": 50.0,
            "distribuicao_etaria": {},
            "distribuicao_raca": {"parda": 7, "branca": 3}
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.distribuicao_raca.indigena, 0);
        assert_eq!(stats.distribuicao_raca.preta, 0);
        assert_eq!(stats.distribuicao_raca.amarela, 0);
    }

    #[test]
    fn test_decode_feature_collection_with_null_metric() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": []},
                "properties": {"nome": "Manaus", "vul_score_final": null, "total_jovens": 500}
            }]
        }"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(fc.features.len(), 1);
        let props = &fc.features[0].properties;
        assert!(props.get("vul_score_final").unwrap().is_null());
        assert_eq!(props.get("total_jovens").unwrap().as_u64(), Some(500));
    }

    #[test]
    fn test_decode_ranking_with_null_value() {
        let json = r#"{
            "top_5": [{"municipio": "MANAUS", "value": 0.47}],
            "bottom_5": [{"municipio": "ENVIRA", "value": null}]
        }"#;
        let ranking: Ranking = serde_json::from_str(json).unwrap();
        assert_eq!(ranking.top_5[0].value, Some(0.47));
        assert_eq!(ranking.bottom_5[0].value, None);
    }
}
