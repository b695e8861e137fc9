//! Pure builders for the choropleth payload handed to Leaflet.
//!
//! Styling is re-evaluated from the active metric on every refresh: each
//! feature gets a `__fill` color (bucketed via the color scale) and a
//! `__popup` listing the value of every registered metric, not just the
//! active one. Nothing is cached on the features between refreshes.

use serde_json::{json, Map, Value};

use pja_api::models::FeatureCollection;
use pja_metrics::color_scale;
use pja_metrics::MetricId;

/// Numeric value of one metric field in a properties bag; null or absent
/// means "no data".
fn metric_value(props: &Map<String, Value>, field: &str) -> Option<f64> {
    props.get(field).and_then(Value::as_f64)
}

/// Popup HTML for one feature: the municipality name in bold, then one
/// line per registered metric with its formatted value.
pub fn popup_html(props: &Map<String, Value>) -> Option<String> {
    let nome = props.get("nome")?.as_str()?;
    let mut html = format!("<b>{nome}</b><br>");
    for id in MetricId::ALL {
        let def = id.def();
        let value = metric_value(props, def.value_field);
        html.push_str(&format!("<b>{}:</b> {}<br>", def.label, (def.formatter)(value)));
    }
    Some(html)
}

/// Decorate a fetched collection for rendering under the active metric.
///
/// Produces a fresh GeoJSON value whose features carry `__fill` and
/// (where the feature has a name) `__popup`.
pub fn map_payload(collection: &FeatureCollection, active: MetricId) -> Value {
    let def = active.def();
    let features: Vec<Value> = collection
        .features
        .iter()
        .map(|feature| {
            let mut props = feature.properties.clone();
            let value = metric_value(&props, def.value_field);
            props.insert(
                "__fill".to_string(),
                Value::String(color_scale::color_for(value, def).to_string()),
            );
            if let Some(popup) = popup_html(&feature.properties) {
                props.insert("__popup".to_string(), Value::String(popup));
            }
            json!({
                "type": "Feature",
                "geometry": feature.geometry,
                "properties": props,
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pja_metrics::color_scale::NO_DATA_COLOR;

    fn collection(props: Value) -> FeatureCollection {
        serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": []},
                "properties": props,
            }],
        }))
        .unwrap()
    }

    #[test]
    fn test_fill_color_follows_active_metric() {
        let fc = collection(json!({
            "nome": "Manaus",
            "vul_score_final": 0.51,
            "renda_media_final": 1600.0,
            "taxa_alfabetizacao_jovens": 96.0,
            "total_jovens": 400000,
        }));

        let payload = map_payload(&fc, MetricId::Vulnerabilidade);
        // 0.51 exceeds 0.50 but not 0.52: third bucket of the ramp
        assert_eq!(payload["features"][0]["properties"]["__fill"], "#ffc107");

        let payload = map_payload(&fc, MetricId::Renda);
        // 1600 exceeds the top threshold: last bucket
        assert_eq!(payload["features"][0]["properties"]["__fill"], "#fee5d9");
    }

    #[test]
    fn test_missing_value_gets_no_data_color() {
        let fc = collection(json!({ "nome": "Envira", "vul_score_final": null }));
        let payload = map_payload(&fc, MetricId::Vulnerabilidade);
        assert_eq!(
            payload["features"][0]["properties"]["__fill"],
            NO_DATA_COLOR
        );
    }

    #[test]
    fn test_popup_lists_every_registered_metric() {
        let fc = collection(json!({
            "nome": "Tefé",
            "vul_score_final": 0.49,
            "renda_media_final": 950.0,
            "taxa_alfabetizacao_jovens": 88.5,
            "total_jovens": 12000,
        }));
        let popup = popup_html(&fc.features[0].properties).unwrap();
        assert!(popup.starts_with("<b>Tefé</b><br>"));
        assert!(popup.contains("<b>Score de Vulnerabilidade:</b> 0.490<br>"));
        assert!(popup.contains("<b>Renda Média:</b> R$ 950<br>"));
        assert!(popup.contains("<b>Taxa de Alfabetização:</b> 88.5%<br>"));
        assert!(popup.contains("<b>População Jovem:</b> 12.000<br>"));
    }

    #[test]
    fn test_feature_without_name_gets_no_popup() {
        let fc = collection(json!({ "vul_score_final": 0.49 }));
        let payload = map_payload(&fc, MetricId::Vulnerabilidade);
        assert!(payload["features"][0]["properties"].get("__popup").is_none());
        // Fill is still applied.
        assert_eq!(payload["features"][0]["properties"]["__fill"], "#fff59d");
    }

    #[test]
    fn test_original_geometry_is_preserved() {
        let fc = collection(json!({ "nome": "Coari" }));
        let payload = map_payload(&fc, MetricId::Populacao);
        assert_eq!(payload["type"], "FeatureCollection");
        assert_eq!(payload["features"][0]["geometry"]["type"], "Polygon");
    }
}
