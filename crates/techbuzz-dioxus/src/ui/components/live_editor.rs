use dioxus::prelude::*;
use techbuzz_engine::{LivePreviewSources, PreviewAssets};

/// Pane contents together with the sources they were seeded from.
#[derive(Debug, Clone, PartialEq)]
struct Edits {
    seed: LivePreviewSources,
    current: LivePreviewSources,
}

impl Edits {
    fn seeded(sources: &LivePreviewSources) -> Self {
        Self {
            seed: sources.clone(),
            current: sources.clone(),
        }
    }

    /// Edits made against `sources`, or `sources` itself once they are stale.
    fn current_for(&self, sources: &LivePreviewSources) -> LivePreviewSources {
        if self.seed == *sources {
            self.current.clone()
        } else {
            sources.clone()
        }
    }
}

type Field = fn(&mut LivePreviewSources) -> &mut String;

/// Three editable panes plus a sandboxed preview that rebuilds on every keystroke.
///
/// The panes start from `sources` and are reset whenever a different set of
/// sources is passed in. Nothing is rendered while all three panes are empty.
#[component]
pub fn LiveEditor(sources: LivePreviewSources, assets: PreviewAssets) -> Element {
    let edits = use_signal(|| Edits::seeded(&sources));

    let current = edits.read().current_for(&sources);
    if current.is_empty() {
        return rsx! {};
    }
    let srcdoc = current.document(&assets);

    rsx! {
        div {
            class: "live-editor",
            h2 { "Live Code Editor & Preview" }
            div {
                class: "editor-panes",
                {pane("HTML", current.markup.clone(), &sources, edits, |s| &mut s.markup)}
                {pane("CSS", current.style.clone(), &sources, edits, |s| &mut s.style)}
                {pane("JavaScript", current.script.clone(), &sources, edits, |s| &mut s.script)}
            }
            iframe {
                class: "preview-frame",
                title: "Live Editor Preview",
                sandbox: "allow-scripts allow-same-origin",
                srcdoc: "{srcdoc}",
            }
        }
    }
}

fn pane(
    label: &'static str,
    value: String,
    sources: &LivePreviewSources,
    mut edits: Signal<Edits>,
    field: Field,
) -> Element {
    let sources = sources.clone();
    rsx! {
        div {
            class: "editor-pane",
            h4 { "{label}" }
            textarea {
                spellcheck: "false",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let mut edits = edits.write();
                    if edits.seed != sources {
                        *edits = Edits::seeded(&sources);
                    }
                    *field(&mut edits.current) = evt.value();
                },
            }
        }
    }
}
