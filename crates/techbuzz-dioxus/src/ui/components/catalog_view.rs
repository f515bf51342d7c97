use dioxus::prelude::*;
use techbuzz_engine::content::Section;
use techbuzz_engine::{Lookup, PreviewAssets, Selection};

use super::{Card, FormattedContent, NotFoundNotice, Ripple, TutorialExtras};

/// Two-column browser over one catalog: selected entry and card list on the
/// left, index of titles on the right.
///
/// Selection changes are reported through `on_select`; the caller owns the
/// [`Selection`] and the routing side effect.
#[component]
pub fn CatalogView(
    selection: Selection,
    assets: PreviewAssets,
    on_select: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    let section = selection.section();
    let catalog = section.catalog();

    let item = match selection.resolve(catalog) {
        Lookup::Found(item) => item,
        Lookup::NotFound(_) => {
            return rsx! {
                NotFoundNotice {
                    message: format!("{} not found.", section.item_noun()),
                    back_label: format!("Back to {}", section.label()),
                    on_back,
                }
            };
        }
    };

    rsx! {
        div {
            class: "catalog-layout",
            main {
                class: "catalog-main",
                section {
                    class: "catalog-entry",
                    h1 { "{item.title}" }
                    FormattedContent { content: item.content.clone() }
                    if section == Section::Tutorials {
                        TutorialExtras { item: item.clone(), assets }
                    }
                }
                section {
                    class: "catalog-cards",
                    for entry in catalog.iter() {
                        Ripple {
                            key: "{entry.id}",
                            class: "card-ripple",
                            onclick: {
                                let id = entry.id.clone();
                                move |_| on_select.call(id.clone())
                            },
                            Card {
                                title: entry.title.clone(),
                                description: entry.description.clone(),
                                selected: selection.is_selected(&entry.id),
                            }
                        }
                    }
                }
            }
            aside {
                class: "catalog-sidebar",
                h2 { "{section.index_heading()}" }
                ul {
                    for entry in catalog.iter() {
                        li {
                            key: "{entry.id}",
                            Ripple {
                                class: sidebar_class(selection.is_selected(&entry.id)),
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| on_select.call(id.clone())
                                },
                                span { "{entry.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sidebar_class(selected: bool) -> &'static str {
    if selected {
        "sidebar-entry selected"
    } else {
        "sidebar-entry"
    }
}
