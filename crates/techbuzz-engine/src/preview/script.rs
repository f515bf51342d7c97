/// Quotes `text` as a double-quoted JavaScript string literal that is safe
/// to place inside a `<script>` element.
pub fn js_string_literal(text: &str) -> String {
    let escaped = html_escape::encode_script_double_quoted_text(text);
    let escaped = escaped.replace('\r', "\\r").replace('\n', "\\n");
    format!("\"{escaped}\"")
}
