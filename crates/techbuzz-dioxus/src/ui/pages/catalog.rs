use dioxus::prelude::*;
use techbuzz_engine::content::Section;
use techbuzz_engine::{PreviewAssets, Selection};

use crate::ui::Route;
use crate::ui::components::CatalogView;

#[component]
pub fn Blogs() -> Element {
    rsx! {
        CatalogBrowser { section: Section::Blogs, id: None }
    }
}

#[component]
pub fn BlogPost(id: String) -> Element {
    rsx! {
        CatalogBrowser { section: Section::Blogs, id: Some(id) }
    }
}

#[component]
pub fn Tutorials() -> Element {
    rsx! {
        CatalogBrowser { section: Section::Tutorials, id: None }
    }
}

#[component]
pub fn Tutorial(id: String) -> Element {
    rsx! {
        CatalogBrowser { section: Section::Tutorials, id: Some(id) }
    }
}

/// Keeps a [`Selection`] in sync with the route parameter and pushes a new
/// route whenever the user picks an entry.
#[component]
fn CatalogBrowser(section: Section, id: Option<String>) -> Element {
    let catalog = section.catalog();
    let assets = use_context::<PreviewAssets>();
    let navigator = use_navigator();
    let mut selection = use_signal(|| Selection::from_navigation(catalog, id.as_deref()));

    use_effect(use_reactive!(|(id,)| {
        if selection.write().on_navigation(id.as_deref()) {
            log::info!("{section} selection followed route to {id:?}");
        }
    }));

    rsx! {
        CatalogView {
            selection: selection(),
            assets,
            on_select: move |item_id: String| {
                let request = selection.write().select(&item_id);
                log::info!("Navigating to {}", request.path());
                navigator.push(Route::from(request));
            },
            on_back: move |_| {
                navigator.push(Route::index(section));
            },
        }
    }
}
