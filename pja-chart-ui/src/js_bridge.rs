//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet and Chart.js are loaded from `<script>` tags in index.html; the
//! glue functions in `assets/js/*.js` are evaluated as globals once both
//! libraries exist and exposed via `window.*`. This module provides safe
//! Rust wrappers that serialize data and call those globals.

// Embed the glue JS files at compile time
static MAP_GLUE_JS: &str = include_str!("../assets/js/map-glue.js");
static CHART_GLUE_JS: &str = include_str!("../assets/js/chart-glue.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PJA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the glue scripts once Leaflet and Chart.js are loaded.
///
/// The glue files define functions like `pjaSetMapData(...)` via `function`
/// declarations. They are evaluated at global scope via indirect eval once
/// both libraries are ready, then explicitly promoted to `window.*`, and
/// `window.__pjaGlueReady` is flipped so the call wrappers can poll for it.
pub fn init_interop() {
    let all_js = [MAP_GLUE_JS, CHART_GLUE_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__pjaGlueScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__pjaGlueScripts);
                    delete window.__pjaGlueScripts;
                    if (typeof pjaInitMap !== 'undefined') window.pjaInitMap = pjaInitMap;
                    if (typeof pjaSetMapData !== 'undefined') window.pjaSetMapData = pjaSetMapData;
                    if (typeof pjaSetLegend !== 'undefined') window.pjaSetLegend = pjaSetLegend;
                    if (typeof pjaInvalidateMapSize !== 'undefined') window.pjaInvalidateMapSize = pjaInvalidateMapSize;
                    if (typeof pjaRenderChart !== 'undefined') window.pjaRenderChart = pjaRenderChart;
                    if (typeof pjaDestroyChart !== 'undefined') window.pjaDestroyChart = pjaDestroyChart;
                    window.__pjaGlueReady = true;
                    console.log('PJA interop initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Wait for the glue and the container element, then run `call`.
fn call_when_ready(container_id: &str, call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__pjaGlueReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{ {call} }} catch(e) {{ console.error('[PJA] interop error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn escape_json(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Create the Leaflet map and its empty GeoJSON layer. Idempotent.
pub fn init_map(container_id: &str) {
    call_when_ready(container_id, &format!("window.pjaInitMap('{container_id}');"));
}

/// Replace all map geometry with a decorated feature collection.
pub fn set_map_data(container_id: &str, geojson: &str) {
    let escaped = escape_json(geojson);
    call_when_ready(
        container_id,
        &format!("window.pjaSetMapData('{escaped}');"),
    );
}

/// Remove and rebuild the legend control.
pub fn set_legend(container_id: &str, title: &str, entries_json: &str) {
    let escaped_title = escape_json(title);
    let escaped = escape_json(entries_json);
    call_when_ready(
        container_id,
        &format!("window.pjaSetLegend('{escaped_title}', '{escaped}');"),
    );
}

/// Recalculate the map size after layout settles (deferred ~100ms in JS).
/// Called once, after the first successful map render.
pub fn invalidate_map_size(container_id: &str) {
    call_when_ready(container_id, "window.pjaInvalidateMapSize();");
}

/// An owned handle for one chart slot (a canvas element).
///
/// `replace` is the only way to draw: it destroys whatever instance the
/// slot held before constructing the new one, so a refresh can never
/// update a stale chart in place.
#[derive(Debug, Clone, Copy)]
pub struct ChartSlot {
    canvas_id: &'static str,
}

impl ChartSlot {
    pub const fn new(canvas_id: &'static str) -> Self {
        ChartSlot { canvas_id }
    }

    pub fn canvas_id(&self) -> &'static str {
        self.canvas_id
    }

    /// Destroy the previous Chart instance (if any) and build a new one
    /// from a full Chart.js config.
    pub fn replace(&self, config_json: &str) {
        let escaped = escape_json(config_json);
        call_when_ready(
            self.canvas_id,
            &format!("window.pjaRenderChart('{id}', '{escaped}');", id = self.canvas_id),
        );
    }

    pub fn destroy(&self) {
        call_when_ready(
            self.canvas_id,
            &format!("window.pjaDestroyChart('{id}');", id = self.canvas_id),
        );
    }
}
