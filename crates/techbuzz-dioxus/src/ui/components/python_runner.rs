use dioxus::prelude::*;
use techbuzz_engine::PreviewAssets;
use techbuzz_engine::preview::python;

/// Runs a Python snippet with Pyodide inside a sandboxed frame.
#[component]
pub fn PythonRunner(code: String, assets: PreviewAssets) -> Element {
    let srcdoc = python::build(&code, &assets);

    rsx! {
        div {
            class: "python-runner",
            h2 { "Run Python" }
            iframe {
                class: "python-frame",
                title: "Python Sandbox",
                sandbox: "allow-scripts allow-same-origin",
                srcdoc: "{srcdoc}",
            }
        }
    }
}
