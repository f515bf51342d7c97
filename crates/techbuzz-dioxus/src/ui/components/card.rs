use dioxus::prelude::*;

/// Summary card for a catalog entry; highlighted when selected.
#[component]
pub fn Card(title: String, description: String, selected: bool) -> Element {
    rsx! {
        div {
            class: if selected { "card selected" } else { "card" },
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
