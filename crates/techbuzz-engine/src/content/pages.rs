/// A fixed informational page rendered through the content formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub title: &'static str,
    pub last_updated: Option<&'static str>,
    pub content: &'static str,
}

pub const ABOUT: StaticPage = StaticPage {
    title: "About Us",
    last_updated: None,
    content: r#"
Welcome to our website! We are passionate about sharing knowledge through detailed blogs and hands-on tutorials. Whether you're a beginner or an experienced developer, you'll find valuable content tailored to your journey.

Our mission is to provide high-quality, easy-to-understand resources on web development, programming, and modern technologies. Everything we publish is designed to help you grow and succeed in your career or hobby.
"#,
};

pub const PRIVACY_POLICY: StaticPage = StaticPage {
    title: "Privacy Policy",
    last_updated: Some("July 2025"),
    content: r#"
Your privacy is important to us. This Privacy Policy explains how we collect, use, and protect your information when you use our website.

## Information We Collect

- Personal information you provide when signing up or contacting us.
- Data collected automatically via cookies and analytics tools.

## How We Use Your Information

We use your data to improve our services, communicate with you, and ensure a better experience.

## Cookies

We use cookies to enhance site functionality and track usage patterns.

## Your Rights

You may request access to, correction, or deletion of your personal information.

## Contact Us

If you have questions about this policy, contact us at contact form.
"#,
};

pub const TERMS: StaticPage = StaticPage {
    title: "Terms of Service",
    last_updated: Some("July 2025"),
    content: r#"
## Acceptance of Terms

By using our website, you agree to these Terms of Service.

## Use of Content

You may view, download, and print content for personal, non-commercial use only. Redistribution or modification is prohibited without permission.

## User Conduct

Users must not engage in illegal activities or violate others' rights when using the site.

## Disclaimer

The site and content are provided "as is" without warranties of any kind.

## Changes to Terms

We may update these terms occasionally. Continued use of the site implies acceptance.

## Contact Us

If you have any questions, contact us through contact form.
"#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::{FormattedBlock, format_blocks};

    #[test]
    fn about_is_two_paragraphs() {
        let blocks = format_blocks(ABOUT.content);
        assert_eq!(blocks.len(), 2);
        assert!(
            blocks
                .iter()
                .all(|b| matches!(b, FormattedBlock::Paragraph(_)))
        );
    }

    #[test]
    fn privacy_policy_lists_collected_information() {
        let blocks = format_blocks(PRIVACY_POLICY.content);
        assert!(matches!(&blocks[2], FormattedBlock::List(items) if items.len() == 2));
    }

    #[test]
    fn terms_sections_are_headings() {
        let headings = format_blocks(TERMS.content)
            .into_iter()
            .filter(|b| matches!(b, FormattedBlock::Heading(_)))
            .count();
        assert_eq!(headings, 6);
    }
}
