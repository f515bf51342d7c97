use chrono::Datelike;
use dioxus::prelude::*;
use techbuzz_config::Config;

use crate::ui::Route;

pub fn copyright_notice(year: i32, site_name: &str) -> String {
    format!("© {year} {site_name}. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<Config>();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "site-footer",
            p { "{copyright_notice(year, &config.site_name)}" }
            div {
                class: "footer-links",
                Link { to: Route::PrivacyPolicy {}, "Privacy Policy" }
                span { class: "footer-separator", "|" }
                Link { to: Route::Terms {}, "Terms of Service" }
            }
        }
    }
}
