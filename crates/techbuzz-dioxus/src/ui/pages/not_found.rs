use dioxus::prelude::*;

use crate::ui::Route;
use crate::ui::components::NotFoundNotice;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));
    log::info!("No page at {path}");

    rsx! {
        NotFoundNotice {
            message: format!("Page not found: {path}"),
            back_label: "Back to Home",
            on_back: move |_| {
                navigator.push(Route::Home {});
            },
        }
    }
}
