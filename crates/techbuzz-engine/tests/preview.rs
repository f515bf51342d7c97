use techbuzz_engine::content::{Section, tutorials};
use techbuzz_engine::preview::{LivePreviewSources, PreviewAssets, build, build_with};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

#[test]
fn empty_fragments_build_complete_document() {
    let doc = build("", "", "");
    assert!(doc.contains("<head>"));
    assert!(doc.contains("</head>"));
    assert!(doc.contains("<body>"));
    assert!(doc.contains("</body>"));

    insta::assert_snapshot!(doc, @r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <style>

  </style>
</head>
<body>

<script>
function runUserCode() {
  try {

  } catch (error) {
    var report = document.createElement('pre');
    report.style.cssText = 'color: red; white-space: pre-wrap; font-family: monospace;';
    report.textContent = error && error.message ? error.message : String(error);
    document.body.appendChild(report);
  }
}
document.addEventListener('DOMContentLoaded', runUserCode);
</script>
</body>
</html>
"#);
}

#[test]
fn map_script_pulls_in_leaflet_stylesheet() {
    let with_map = build(
        r#"<div id="map"></div>"#,
        "",
        "var map = L.map('map');",
    );
    let without_map = build("<p>hi</p>", "", "console.log('hi');");

    assert!(with_map.contains(LEAFLET_CSS));
    assert!(with_map.contains("#map { height: 400px; width: 100%; margin: 0; padding: 0; }"));
    assert!(!without_map.contains(LEAFLET_CSS));
    assert!(!without_map.contains("leaflet"));
}

#[test]
fn identical_input_builds_identical_documents() {
    let args = ("<h1>x</h1>", "h1 { color: green; }", "L.map('map');");
    assert_eq!(build(args.0, args.1, args.2), build(args.0, args.1, args.2));

    let assets = PreviewAssets::default();
    assert_eq!(
        build_with(&assets, args.0, args.1, args.2),
        build(args.0, args.1, args.2)
    );
}

#[test]
fn hostile_fragments_still_produce_full_document() {
    let doc = build("</body></html>", "</style>", "}}}throw 1;");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.trim_end().ends_with("</html>"));
    assert!(doc.contains("<head>"));
}

#[test]
fn every_tutorial_builds() {
    let catalog = Section::Tutorials.catalog();
    assert_eq!(catalog.len(), tutorials::catalog().len());

    for item in catalog.iter() {
        let sources = LivePreviewSources::from_item(item);
        let doc = sources.document(&PreviewAssets::default());
        assert!(doc.contains("<body>"), "tutorial {}", item.id);
    }
}
