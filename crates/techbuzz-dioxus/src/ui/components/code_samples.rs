use dioxus::prelude::*;
use techbuzz_engine::CodeSamples;

/// Read-only listing of a tutorial's code, one block per language.
#[component]
pub fn CodeSamplesView(samples: CodeSamples) -> Element {
    rsx! {
        div {
            class: "code-samples",
            h2 { "Code Samples" }
            for sample in samples.iter() {
                div {
                    key: "{sample.language}",
                    class: "code-sample",
                    h3 { "{sample.language.label()}" }
                    pre {
                        code {
                            class: "language-{sample.language.code_class()}",
                            "{sample.source.trim()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use techbuzz_engine::Language;

    #[test]
    fn test_renders_each_language_trimmed() {
        let mut samples = CodeSamples::new();
        samples.insert(Language::Html, "\n  <p>hi</p>\n");
        samples.insert(Language::Python, "print(1)");

        let mut dom =
            VirtualDom::new_with_props(CodeSamplesView, CodeSamplesViewProps { samples });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<h3>HTML</h3>"));
        assert!(html.contains("<h3>Python</h3>"));
        assert!(html.contains("class=\"language-python\""));
        assert!(html.contains("<code class=\"language-html\">&lt;p&gt;hi"));
        assert!(html.find("HTML").unwrap() < html.find("Python").unwrap());
    }
}
