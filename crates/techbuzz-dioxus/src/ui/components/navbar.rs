use dioxus::prelude::*;
use techbuzz_config::Config;

use super::HamburgerMenu;
use crate::ui::Route;

/// Primary site sections, in display order.
pub fn nav_links() -> [(&'static str, Route); 5] {
    [
        ("Home", Route::Home {}),
        ("About", Route::About {}),
        ("Blogs", Route::Blogs {}),
        ("Tutorials", Route::Tutorials {}),
        ("Contact", Route::Contact {}),
    ]
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<Config>();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-left",
                HamburgerMenu { site_name: config.site_name.clone() }
            }
            div {
                class: "navbar-center",
                for (label, route) in nav_links() {
                    Link {
                        key: "{label}",
                        class: "navbar-link",
                        to: route,
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nav_links_cover_top_level_pages() {
        let paths: Vec<String> = nav_links()
            .into_iter()
            .map(|(_, route)| route.to_string())
            .collect();

        assert_eq!(paths, vec!["/", "/about", "/blogs", "/tutorials", "/contact"]);
    }
}
