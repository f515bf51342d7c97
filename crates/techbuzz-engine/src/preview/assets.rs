pub const DEFAULT_LEAFLET_VERSION: &str = "1.9.4";
pub const DEFAULT_PYODIDE_VERSION: &str = "0.23.4";

/// External resources a preview document may pull in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewAssets {
    pub leaflet_css: String,
    pub leaflet_js: String,
    /// Pyodide distribution directory, with trailing slash.
    pub pyodide_index: String,
}

impl PreviewAssets {
    /// CDN locations for the given library versions.
    pub fn for_versions(leaflet_version: &str, pyodide_version: &str) -> Self {
        Self {
            leaflet_css: format!("https://unpkg.com/leaflet@{leaflet_version}/dist/leaflet.css"),
            leaflet_js: format!("https://unpkg.com/leaflet@{leaflet_version}/dist/leaflet.js"),
            pyodide_index: format!("https://cdn.jsdelivr.net/pyodide/v{pyodide_version}/full/"),
        }
    }
}

impl Default for PreviewAssets {
    fn default() -> Self {
        Self::for_versions(DEFAULT_LEAFLET_VERSION, DEFAULT_PYODIDE_VERSION)
    }
}
