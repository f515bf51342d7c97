use dioxus::prelude::*;
use techbuzz_engine::{MapView, PreviewAssets};

#[component]
pub fn MapEmbed(view: MapView, assets: PreviewAssets) -> Element {
    let srcdoc = view.document(&assets);

    rsx! {
        iframe {
            class: "map-frame",
            title: "Map",
            sandbox: "allow-scripts allow-same-origin",
            srcdoc: "{srcdoc}",
        }
    }
}
