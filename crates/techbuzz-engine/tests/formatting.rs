use pretty_assertions::assert_eq;
use rstest::rstest;
use techbuzz_engine::formatting::{BlockKey, FormattedBlock, format, format_blocks};

fn heading(text: &str) -> FormattedBlock {
    FormattedBlock::Heading(text.to_string())
}

fn paragraph(text: &str) -> FormattedBlock {
    FormattedBlock::Paragraph(text.to_string())
}

fn list(items: &[&str]) -> FormattedBlock {
    FormattedBlock::List(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn heading_list_paragraph() {
    assert_eq!(
        format_blocks("## Title\n- a\n- b\nText"),
        vec![heading("Title"), list(&["a", "b"]), paragraph("Text")]
    );
}

#[rstest]
#[case("- a")]
#[case("- a\n- b")]
#[case("- a\n- b\n- c\n- d")]
#[case("\n\n- a\n\n- b\n\n")]
fn only_list_lines_make_one_list(#[case] input: &str) {
    let blocks = format(input);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].key, BlockKey::Final);

    let expected: Vec<String> = input
        .lines()
        .filter_map(|l| l.strip_prefix("- "))
        .map(str::to_string)
        .collect();
    assert_eq!(blocks[0].block, FormattedBlock::List(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\n")]
#[case("\u{feff}\n")]
fn blank_input_formats_to_nothing(#[case] input: &str) {
    assert!(format(input).is_empty());
}

#[test]
fn blank_lines_separate_paragraphs_without_empty_blocks() {
    assert_eq!(
        format_blocks("First line.\n\n\n   \nSecond line."),
        vec![paragraph("First line."), paragraph("Second line.")]
    );
}

#[test]
fn consecutive_text_lines_stay_separate_paragraphs() {
    assert_eq!(
        format_blocks("one\ntwo"),
        vec![paragraph("one"), paragraph("two")]
    );
}

#[test]
fn single_list_line_flushes_before_trailing_text() {
    assert_eq!(
        format_blocks("- only\nclosing words"),
        vec![list(&["only"]), paragraph("closing words")]
    );
}

#[test]
fn list_before_any_heading_follows_mechanical_rule() {
    assert_eq!(
        format_blocks("- early\n## Later\n- x"),
        vec![list(&["early"]), heading("Later"), list(&["x"])]
    );
}

#[test]
fn heading_splits_adjacent_lists() {
    assert_eq!(
        format_blocks("- a\n## Break\n- b"),
        vec![list(&["a"]), heading("Break"), list(&["b"])]
    );
}

#[test]
fn indented_and_crlf_lines_are_trimmed() {
    assert_eq!(
        format_blocks("  ## Title  \r\n    - item\r\n  body  \r\n"),
        vec![heading("Title"), list(&["item"]), paragraph("body")]
    );
}

#[test]
fn leading_byte_order_mark_is_trimmed() {
    assert_eq!(format_blocks("\u{feff}## Title"), vec![heading("Title")]);
    assert_eq!(format_blocks("- a\n\u{feff}- b"), vec![list(&["a", "b"])]);
}

#[test]
fn keys_are_positional_and_unique() {
    let blocks = format("## A\n- x\n- y\nText\n- z");
    let keys: Vec<String> = blocks.iter().map(|b| b.render_key()).collect();
    assert_eq!(keys, vec!["h2-0", "ul-3", "p-3", "ul-final"]);
}

#[test]
fn formatting_is_deterministic() {
    let input = "## A\n\n- x\n- y\n\nSome text\n## B\n- z";
    assert_eq!(format(input), format(input));
}

#[test]
fn inline_markup_is_left_alone() {
    assert_eq!(
        format_blocks("**bold** and [link](x) <b>html</b>"),
        vec![paragraph("**bold** and [link](x) <b>html</b>")]
    );
}
