//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals (no ES modules) exposed via `window.*`.
//! D3 itself must be loaded by the host page.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// Evaluate `code`, logging a failure instead of propagating it.
fn eval_logged(what: &str, code: &str) {
    if let Err(e) = js_sys::eval(code) {
        log::warn!("[bike] js_bridge: {} failed: {:?}", what, e);
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Bike JS call failed:', e); }}",
        code
    );
    eval_logged("call", &wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stashed on `window` and evaluated at global scope once
/// D3 is present, then each render function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, LINE_CHART_JS, GROUPED_BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__bikeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    eval_logged("storing chart scripts", &store_js);

    let init_js = r#"
        (function() {
            if (window.__bikeChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__bikeChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__bikeChartScripts);
                    delete window.__bikeChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__bikeChartsReady = true;
                    console.log('Bike charts initialized');
                }
            }, 100);
        })();
    "#;
    eval_logged("chart init", init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn escape_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Poll until the charts are initialized and the container exists, then
/// call `window.<render_fn>(container_id, data_json, config_json)`.
fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js(data_json);
    let escaped_config = escape_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__bikeChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[bike] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a vertical bar chart of `[{label, value}]`.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a categorical line chart of `[{label, value}]`.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render casual vs registered bars of `[{label, casual, registered}]`.
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, data_json, config_json);
}
