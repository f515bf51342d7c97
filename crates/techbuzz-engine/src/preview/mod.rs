//! # Live Preview
//!
//! Builds the standalone documents shown inside sandboxed iframes:
//!
//! - **`document`**: markup/style/script editor preview, with on-demand
//!   Leaflet loading
//! - **`map`**: a configured single-marker map, rendered through the same
//!   builder
//! - **`python`**: a Pyodide runner for Python samples
//!
//! All builders are pure: the same input always yields the same bytes. No
//! sanitisation happens here; isolation comes from the iframe sandbox.

pub mod assets;
pub mod document;
pub mod map;
pub mod python;
pub mod script;

pub use assets::PreviewAssets;
pub use document::{LEAFLET_TOKEN, build, build_with, needs_leaflet};
pub use map::MapView;

use crate::content::{ContentItem, Language};

/// The three editable fragments of the live editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LivePreviewSources {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl LivePreviewSources {
    /// Seeds the editor from an item's HTML, CSS and JavaScript samples.
    ///
    /// Missing samples become empty strings.
    pub fn from_item(item: &ContentItem) -> Self {
        let sample = |language| item.sample(language).unwrap_or_default().to_string();
        Self {
            markup: sample(Language::Html),
            style: sample(Language::Css),
            script: sample(Language::JavaScript),
        }
    }

    /// True when there is nothing to preview.
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style.is_empty() && self.script.is_empty()
    }

    pub fn document(&self, assets: &PreviewAssets) -> String {
        build_with(assets, &self.markup, &self.style, &self.script)
    }
}
