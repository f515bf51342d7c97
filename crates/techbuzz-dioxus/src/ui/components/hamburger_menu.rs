use dioxus::prelude::*;

use super::navbar::nav_links;

/// Whether a key press dismisses an open menu.
fn closes_menu(key: &Key) -> bool {
    *key == Key::Escape
}

/// Site name with a toggle that opens a dropdown of the main links.
///
/// An open menu closes on Escape, on a click outside it, or when a link is
/// followed.
#[component]
pub fn HamburgerMenu(site_name: String) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger",
            onkeydown: move |evt: KeyboardEvent| {
                if open() && closes_menu(&evt.key()) {
                    open.set(false);
                }
            },
            span { class: "site-name", "{site_name}" }
            button {
                class: "hamburger-toggle",
                aria_label: "Toggle menu",
                onclick: move |_| {
                    let was_open = open();
                    open.set(!was_open);
                },
                "☰"
            }
            if open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "hamburger-menu",
                    for (label, route) in nav_links() {
                        Link {
                            key: "{label}",
                            class: "hamburger-link",
                            to: route,
                            onclick: move |_| open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
