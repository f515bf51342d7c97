use super::{LivePreviewSources, PreviewAssets, build_with, script::js_string_literal};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const ATTRIBUTION: &str =
    r#"&copy; <a href="https://openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
const MAX_ZOOM: u8 = 19;

/// A single-marker map embed.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Popup text on the marker; plain text, escaped when embedded.
    pub popup: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            latitude: 51.505,
            longitude: -0.09,
            zoom: 13,
            popup: "A Leaflet marker in London.".to_string(),
        }
    }
}

impl MapView {
    /// Leaflet script: OSM tile layer plus one marker with a popup.
    pub fn script(&self) -> String {
        let Self {
            latitude,
            longitude,
            zoom,
            popup,
        } = self;
        format!(
            "var map = L.map('map').setView([{latitude}, {longitude}], {zoom});\n\
             L.tileLayer('{TILE_URL}', {{\n  maxZoom: {MAX_ZOOM},\n  attribution: '{ATTRIBUTION}'\n}}).addTo(map);\n\
             L.marker([{latitude}, {longitude}]).addTo(map).bindPopup({});",
            js_string_literal(popup)
        )
    }

    /// Markup, style and script for the live preview builder.
    pub fn sources(&self) -> LivePreviewSources {
        LivePreviewSources {
            markup: r#"<div id="map"></div>"#.to_string(),
            style: "#map { height: 100vh; }".to_string(),
            script: self.script(),
        }
    }

    /// Complete sandboxed document showing the map.
    pub fn document(&self, assets: &PreviewAssets) -> String {
        let sources = self.sources();
        build_with(assets, &sources.markup, &sources.style, &sources.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::needs_leaflet;

    #[test]
    fn script_centres_and_marks_location() {
        let script = MapView::default().script();
        assert!(script.starts_with("var map = L.map('map').setView([51.505, -0.09], 13);"));
        assert!(script.contains("L.marker([51.505, -0.09])"));
        assert!(script.contains("maxZoom: 19"));
        assert!(script.ends_with(r#".bindPopup("A Leaflet marker in London.");"#));
    }

    #[test]
    fn popup_text_is_escaped() {
        let view = MapView {
            popup: r#"Say "hello""#.to_string(),
            ..MapView::default()
        };
        assert!(view.script().contains(r#"bindPopup("Say \"hello\"")"#));
    }

    #[test]
    fn document_loads_leaflet() {
        let view = MapView::default();
        assert!(needs_leaflet(&view.script()));
        let doc = view.document(&PreviewAssets::default());
        assert!(doc.contains("leaflet.css"));
        assert!(doc.contains(r#"<div id="map"></div>"#));
    }
}
