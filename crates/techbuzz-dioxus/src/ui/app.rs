use dioxus::prelude::*;
use techbuzz_config::Config;
use techbuzz_engine::content::Section;
use techbuzz_engine::{NavigationRequest, PreviewAssets, styles};

use super::components::{Footer, Navbar};
use super::pages::{
    About, BlogPost, Blogs, Contact, Home, PageNotFound, PrivacyPolicy, Terms, Tutorial, Tutorials,
};

const SITE_CSS: &str = include_str!("../assets/site.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/blogs")]
        Blogs {},
        #[route("/blogs/:id")]
        BlogPost { id: String },
        #[route("/tutorials")]
        Tutorials {},
        #[route("/tutorials/:id")]
        Tutorial { id: String },
        #[route("/contact")]
        Contact {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        #[route("/terms")]
        Terms {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Catalog root of a section.
    pub fn index(section: Section) -> Self {
        match section {
            Section::Blogs => Route::Blogs {},
            Section::Tutorials => Route::Tutorials {},
        }
    }

    pub fn shows_footer(&self) -> bool {
        matches!(self, Route::Home {})
    }
}

impl From<NavigationRequest> for Route {
    fn from(request: NavigationRequest) -> Self {
        match request.section {
            Section::Blogs => Route::BlogPost { id: request.id },
            Section::Tutorials => Route::Tutorial { id: request.id },
        }
    }
}

/// Root component. Expects the site [`Config`] as launch context.
#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    use_context_provider(|| {
        PreviewAssets::for_versions(&config.leaflet_version, &config.pyodide_version)
    });

    rsx! {
        style { {SITE_CSS} }
        style { {styles::global_stylesheet()} }
        Router::<Route> {}
    }
}

/// Layout shared by every route: navbar on top, footer on the home page only.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div {
            class: "app-container",
            Navbar {}
            div {
                class: "page",
                Outlet::<Route> {}
            }
            if route.shows_footer() {
                Footer {}
            }
        }
    }
}
