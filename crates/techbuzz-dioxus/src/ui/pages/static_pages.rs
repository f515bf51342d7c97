use dioxus::prelude::*;
use techbuzz_engine::content::pages;

use crate::ui::components::StaticPageView;

#[component]
pub fn About() -> Element {
    rsx! {
        StaticPageView { page: pages::ABOUT }
    }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        StaticPageView { page: pages::PRIVACY_POLICY }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        StaticPageView { page: pages::TERMS }
    }
}
