use super::PreviewAssets;

/// Token identifying scripts that use the Leaflet global `L`.
pub const LEAFLET_TOKEN: &str = "L.";

const HEAD_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
"#;

const LEAFLET_CONTAINER_STYLE: &str = r#"  <style>
    #map { height: 400px; width: 100%; margin: 0; padding: 0; }
    body, html { margin: 0; padding: 0; height: 100%; }
  </style>
"#;

const RUNNER_OPEN: &str = r#"<script>
function runUserCode() {
  try {
"#;

const RUNNER_CLOSE: &str = r#"
  } catch (error) {
    var report = document.createElement('pre');
    report.style.cssText = 'color: red; white-space: pre-wrap; font-family: monospace;';
    report.textContent = error && error.message ? error.message : String(error);
    document.body.appendChild(report);
  }
}
"#;

const READY_LOADER: &str = "document.addEventListener('DOMContentLoaded', runUserCode);\n";

const DOCUMENT_CLOSE: &str = "</script>\n</body>\n</html>\n";

/// Whether `script` depends on the Leaflet library.
///
/// Heuristic substring test for the `L.` accessor; a false positive only
/// costs an extra stylesheet and script load.
pub fn needs_leaflet(script: &str) -> bool {
    script.contains(LEAFLET_TOKEN)
}

/// Builds a preview document with the default CDN assets.
pub fn build(markup: &str, style: &str, script: &str) -> String {
    build_with(&PreviewAssets::default(), markup, style, script)
}

/// Builds a complete, standalone preview document.
///
/// `style` and `markup` are embedded verbatim. `script` runs inside a
/// `try`/`catch` that appends the error message to the body. Map-dependent
/// scripts run once the Leaflet script has loaded, all others on
/// `DOMContentLoaded`. The output depends only on the arguments.
pub fn build_with(assets: &PreviewAssets, markup: &str, style: &str, script: &str) -> String {
    let leaflet = needs_leaflet(script);
    let mut doc = String::with_capacity(
        HEAD_OPEN.len() + markup.len() + style.len() + script.len() + 1024,
    );

    doc.push_str(HEAD_OPEN);
    if leaflet {
        doc.push_str(&format!(
            "  <link rel=\"stylesheet\" href=\"{}\" crossorigin=\"\" />\n",
            assets.leaflet_css
        ));
        doc.push_str(LEAFLET_CONTAINER_STYLE);
    }
    doc.push_str("  <style>\n");
    doc.push_str(style);
    doc.push_str("\n  </style>\n</head>\n<body>\n");
    doc.push_str(markup);
    doc.push('\n');

    doc.push_str(RUNNER_OPEN);
    doc.push_str(script);
    doc.push_str(RUNNER_CLOSE);
    if leaflet {
        doc.push_str(&leaflet_loader(&assets.leaflet_js));
    } else {
        doc.push_str(READY_LOADER);
    }
    doc.push_str(DOCUMENT_CLOSE);
    doc
}

fn leaflet_loader(src: &str) -> String {
    format!(
        r#"var leafletScript = document.createElement('script');
leafletScript.src = "{src}";
leafletScript.crossOrigin = "";
leafletScript.onload = runUserCode;
document.head.appendChild(leafletScript);
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("L.map('map')", true)]
    #[case("var m = L.marker([0, 0]);", true)]
    #[case("document.title = 'x';", false)]
    #[case("", false)]
    #[case("l.map('map')", false)]
    fn detects_leaflet_token(#[case] script: &str, #[case] expected: bool) {
        assert_eq!(needs_leaflet(script), expected);
    }

    #[test]
    fn fragments_are_embedded_verbatim() {
        let doc = build("<p>&amp; <b>raw</b></p>", "p { color: red; }", "alert('<hi>');");
        assert!(doc.contains("<p>&amp; <b>raw</b></p>"));
        assert!(doc.contains("p { color: red; }"));
        assert!(doc.contains("alert('<hi>');"));
    }

    #[test]
    fn plain_script_runs_on_ready() {
        let doc = build("", "", "console.log(1);");
        assert!(doc.contains("document.addEventListener('DOMContentLoaded', runUserCode);"));
        assert!(!doc.contains("leafletScript"));
    }

    #[test]
    fn map_script_waits_for_leaflet() {
        let doc = build(r#"<div id="map"></div>"#, "", "L.map('map');");
        assert!(doc.contains("leafletScript.onload = runUserCode;"));
        assert!(doc.contains("https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"));
        assert!(!doc.contains("DOMContentLoaded"));
    }

    #[test]
    fn custom_assets_are_used() {
        let assets = PreviewAssets::for_versions("1.7.1", "0.25.0");
        let doc = build_with(&assets, "", "", "L.map('map');");
        assert!(doc.contains("https://unpkg.com/leaflet@1.7.1/dist/leaflet.css"));
        assert!(doc.contains("https://unpkg.com/leaflet@1.7.1/dist/leaflet.js"));
    }

    #[test]
    fn error_report_is_monospace_red_preformatted() {
        let doc = build("", "", "throw new Error('boom');");
        assert!(doc.contains("catch (error)"));
        assert!(doc.contains("color: red; white-space: pre-wrap; font-family: monospace;"));
        assert!(doc.contains("document.body.appendChild(report);"));
    }
}
