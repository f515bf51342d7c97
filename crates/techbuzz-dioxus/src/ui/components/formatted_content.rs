use dioxus::prelude::*;
use techbuzz_engine::{FormattedBlock, format};

/// Renders restricted-markdown text as headings, paragraphs and lists.
#[component]
pub fn FormattedContent(content: String) -> Element {
    let blocks = format(&content);

    rsx! {
        div {
            class: "formatted-content",
            for keyed in blocks {
                Block {
                    key: "{keyed.render_key()}",
                    block: keyed.block,
                }
            }
        }
    }
}

#[component]
fn Block(block: FormattedBlock) -> Element {
    match block {
        FormattedBlock::Heading(text) => rsx! {
            h2 { "{text}" }
        },
        FormattedBlock::Paragraph(text) => rsx! {
            p { "{text}" }
        },
        FormattedBlock::List(items) => rsx! {
            ul {
                for (i, item) in items.into_iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        },
    }
}
