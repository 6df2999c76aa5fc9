//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Plotly glue lives in `assets/js/plotly-figure.js`. It is evaluated as
//! a global script (no ES modules) once Plotly.js has loaded, and its
//! functions are promoted to `window.*`. Figures are passed across as JSON
//! strings encoded as JS string literals.

static PLOTLY_FIGURE_JS: &str = include_str!("../assets/js/plotly-figure.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GMD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Encode `s` as a JS string literal (JSON strings are valid JS literals).
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the figure scripts with a wait-for-Plotly polling loop.
///
/// Safe to call more than once; later calls are no-ops once the scripts are
/// installed.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__gmdChartsReady) {{ window.__gmdChartScripts = {}; }}",
        js_string(PLOTLY_FIGURE_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gmdChartsReady || window.__gmdChartsPolling) return;
            window.__gmdChartsPolling = true;
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gmdChartScripts);
                    delete window.__gmdChartScripts;
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof destroyFigure !== 'undefined') window.destroyFigure = destroyFigure;
                    window.__gmdChartsReady = true;
                    console.log('GMD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Polls (every 100ms) before `render_figure` gives up on a container.
pub const MAX_RENDER_ATTEMPTS: u32 = 100;

/// Render (or replace) the figure shown in `container_id`.
///
/// Polls until the scripts are initialized and the container exists, so it
/// can be called straight from an effect before the DOM has settled. Stops
/// after [`MAX_RENDER_ATTEMPTS`] if the container never mounts.
pub fn render_figure(container_id: &str, figure_json: &str) {
    call_js(&render_script(container_id, figure_json));
}

fn render_script(container_id: &str, figure_json: &str) -> String {
    let id = js_string(container_id);
    let figure = js_string(figure_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__gmdChartsReady &&
                    typeof window.renderFigure !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderFigure({id}, {figure});
                    }} catch(e) {{ console.error('[GMD] renderFigure error:', e); }}
                }} else if (attempts >= {MAX_RENDER_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.warn('[GMD] gave up waiting for chart container', {id});
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Clear the figure in the given container.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "if (window.destroyFigure) {{ window.destroyFigure({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}"
    ));
}
