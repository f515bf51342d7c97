use dioxus::prelude::*;
use techbuzz_engine::{ContentItem, Language, LivePreviewSources, PreviewAssets};

use super::{CodeSamplesView, LiveEditor, PythonRunner};

/// Code listing, live editor and Python sandbox for a tutorial entry.
#[component]
pub fn TutorialExtras(item: ContentItem, assets: PreviewAssets) -> Element {
    let Some(samples) = item.code_samples.clone() else {
        return rsx! {};
    };
    let sources = LivePreviewSources::from_item(&item);
    let python = item.sample(Language::Python).map(str::to_string);

    rsx! {
        CodeSamplesView { samples }
        LiveEditor { sources, assets: assets.clone() }
        if let Some(code) = python {
            PythonRunner { code, assets }
        }
    }
}
