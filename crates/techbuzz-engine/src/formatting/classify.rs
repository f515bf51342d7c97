/// Prefix that opens a heading line.
pub const HEADING_PREFIX: &str = "## ";
/// Prefix that opens a list item line.
pub const LIST_ITEM_PREFIX: &str = "- ";

/// Byte order mark; treated as whitespace when trimming.
const BOM: char = '\u{feff}';

/// Trims whitespace and byte order marks from both ends.
pub fn trim_content(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Classification of a single trimmed line.
///
/// Phase 1 of formatting: each line is classified on its own, without
/// reference to surrounding lines. The builder owns all cross-line state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `## ` line; carries the text after the prefix.
    Heading(&'a str),
    /// `- ` line; carries the text after the prefix.
    ListItem(&'a str),
    /// Any other non-empty line, trimmed.
    Text(&'a str),
    /// Whitespace-only line.
    Blank,
}

/// Classifies lines of the restricted content format.
pub struct ContentLineClassifier;

impl ContentLineClassifier {
    /// Classifies one raw line.
    ///
    /// Prefix tests run in priority order: heading, list item, text. The line
    /// is trimmed first, so indented `- ` lines are still list items.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = trim_content(line);

        if let Some(rest) = trimmed.strip_prefix(HEADING_PREFIX) {
            LineClass::Heading(rest)
        } else if let Some(rest) = trimmed.strip_prefix(LIST_ITEM_PREFIX) {
            LineClass::ListItem(rest)
        } else if trimmed.is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("## Title", LineClass::Heading("Title"))]
    #[case("   ## Indented", LineClass::Heading("Indented"))]
    #[case("- item", LineClass::ListItem("item"))]
    #[case("  - nested looking", LineClass::ListItem("nested looking"))]
    #[case("plain text  ", LineClass::Text("plain text"))]
    #[case("", LineClass::Blank)]
    #[case(" \t ", LineClass::Blank)]
    #[case("\u{feff}## Marked", LineClass::Heading("Marked"))]
    #[case("\u{feff}", LineClass::Blank)]
    fn classifies_by_prefix(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(ContentLineClassifier.classify(line), expected);
    }

    #[rstest]
    #[case("##Title")]
    #[case("#  Title")]
    #[case("### Deeper")]
    #[case("-item")]
    #[case("* star")]
    fn near_misses_are_text(#[case] line: &str) {
        assert!(matches!(
            ContentLineClassifier.classify(line),
            LineClass::Text(_)
        ));
    }

    #[test]
    fn bare_prefixes_trim_to_text() {
        // "## " trims to "##", which no longer carries the prefix
        assert_eq!(ContentLineClassifier.classify("## "), LineClass::Text("##"));
        assert_eq!(ContentLineClassifier.classify("- "), LineClass::Text("-"));
    }

    #[test]
    fn heading_wins_over_list() {
        assert_eq!(
            ContentLineClassifier.classify("## - not a list"),
            LineClass::Heading("- not a list")
        );
    }
}
