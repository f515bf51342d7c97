use dioxus::prelude::*;

use crate::ui::Route;
use crate::ui::components::Ripple;

const TUTORIALS_IMAGE: &str = "https://images.unsplash.com/photo-1752867494500-9ea9322f58c9?w=500&auto=format&fit=crop&q=60";
const BLOGS_IMAGE: &str = "https://images.unsplash.com/photo-1752805252779-000e9d493b1f?w=500&auto=format&fit=crop&q=60";

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "home",
            h1 { "Welcome to Our Knowledge Hub" }
            p {
                class: "tagline",
                "Dive into curated tutorials and insightful blogs to boost your development skills."
            }
            div {
                class: "home-sections",
                Ripple {
                    class: "home-card",
                    onclick: move |_| {
                        navigator.push(Route::Tutorials {});
                    },
                    HomeCardBody {
                        image: TUTORIALS_IMAGE,
                        icon: "💻",
                        title: "Explore Tutorials",
                        text: "Hands-on guides to help you master web development, JavaScript, TypeScript, and more.",
                    }
                }
                Ripple {
                    class: "home-card",
                    onclick: move |_| {
                        navigator.push(Route::Blogs {});
                    },
                    HomeCardBody {
                        image: BLOGS_IMAGE,
                        icon: "📖",
                        title: "Read Our Blog",
                        text: "Stay updated with the latest trends, tips, and thoughts from the development world.",
                    }
                }
            }
        }
    }
}

#[component]
fn HomeCardBody(
    image: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> Element {
    rsx! {
        div {
            class: "home-card-image",
            img { src: image, alt: title }
            span { class: "home-card-icon", "{icon}" }
        }
        h2 { "{title}" }
        p { "{text}" }
    }
}
