use dioxus::prelude::*;
use techbuzz_engine::StaticPage;

use super::FormattedContent;

#[component]
pub fn StaticPageView(page: StaticPage) -> Element {
    rsx! {
        div {
            class: "static-page",
            h1 { "{page.title}" }
            if let Some(updated) = page.last_updated {
                p {
                    class: "last-updated",
                    em { "Last updated: {updated}" }
                }
            }
            FormattedContent { content: page.content.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use techbuzz_engine::content::pages;

    fn render_page(page: StaticPage) -> String {
        let mut dom = VirtualDom::new_with_props(StaticPageView, StaticPageViewProps { page });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_terms_page_renders_sections() {
        let html = render_page(pages::TERMS);
        assert!(html.contains("<h1>Terms of Service</h1>"));
        assert!(html.contains("<h2>"));
    }

    #[test]
    fn test_about_page_has_no_update_line() {
        let html = render_page(pages::ABOUT);
        assert!(html.contains("<h1>About Us</h1>"));
        assert!(!html.contains("Last updated"));
    }

    #[test]
    fn test_privacy_policy_shows_update_line() {
        let html = render_page(pages::PRIVACY_POLICY);
        assert!(html.contains("Last updated"));
    }
}
