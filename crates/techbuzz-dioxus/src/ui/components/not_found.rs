use dioxus::prelude::*;

/// Fallback shown when a selection or route points at nothing.
#[component]
pub fn NotFoundNotice(
    #[props(into)] message: String,
    #[props(into)] back_label: String,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "not-found",
            h2 { "{message}" }
            button {
                class: "back-button",
                onclick: move |_| on_back.call(()),
                "← {back_label}"
            }
        }
    }
}
