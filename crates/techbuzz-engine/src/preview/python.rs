use super::{PreviewAssets, script::js_string_literal};

pub const LOADING_MESSAGE: &str = "Loading Python runtime...";
pub const RUNNING_MESSAGE: &str = "Running...";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <style>
    body { margin: 0; background-color: #1e1e1e; color: #d4d4d4; font-family: monospace; }
    #output { margin: 0; padding: 1rem; min-height: 150px; white-space: pre-wrap; }
    .error { color: red; }
  </style>
</head>
<body>
"#;

/// Builds a standalone document that runs `code` with Pyodide.
///
/// Output is streamed into a `<pre id="output">`. Failures to load the
/// runtime or to run the code replace the output with an error line.
pub fn build(code: &str, assets: &PreviewAssets) -> String {
    let index = &assets.pyodide_index;
    let source = js_string_literal(code);
    let loading = js_string_literal(LOADING_MESSAGE);
    let running = js_string_literal(RUNNING_MESSAGE);

    format!(
        r#"{HEAD}<pre id="output">{LOADING_MESSAGE}</pre>
<script>
var source = {source};
var output = document.getElementById('output');
function showError(message) {{
  output.className = 'error';
  output.textContent = 'Error: ' + message;
}}
var loader = document.createElement('script');
loader.src = "{index}pyodide.js";
loader.onload = function () {{
  output.textContent = {loading};
  loadPyodide({{ indexURL: "{index}" }}).then(function (pyodide) {{
    output.textContent = {running};
    var buffer = '';
    function append(text) {{
      buffer += text + '\n';
      output.textContent = buffer;
    }}
    pyodide.setStdout({{ batched: append }});
    pyodide.setStderr({{ batched: append }});
    return pyodide.runPythonAsync(source);
  }}).catch(function (error) {{
    showError(error && error.message ? error.message : String(error));
  }});
}};
loader.onerror = function () {{
  showError('Failed to load Pyodide');
}};
document.head.appendChild(loader);
</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_code_as_string_literal() {
        let doc = build("print(\"hi\")\nprint(2)", &PreviewAssets::default());
        assert!(doc.contains(r#"var source = "print(\"hi\")\nprint(2)";"#));
    }

    #[test]
    fn loads_pyodide_from_configured_index() {
        let assets = PreviewAssets::for_versions("1.9.4", "0.26.1");
        let doc = build("print(1)", &assets);
        assert!(doc.contains(r#"loader.src = "https://cdn.jsdelivr.net/pyodide/v0.26.1/full/pyodide.js";"#));
        assert!(doc.contains(r#"indexURL: "https://cdn.jsdelivr.net/pyodide/v0.26.1/full/""#));
    }

    #[test]
    fn starts_in_loading_state_and_is_complete() {
        let doc = build("", &PreviewAssets::default());
        assert!(doc.contains(r#"<pre id="output">Loading Python runtime...</pre>"#));
        assert!(doc.contains("<head>"));
        assert!(doc.contains("<body>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn deterministic() {
        let assets = PreviewAssets::default();
        assert_eq!(build("x = 1", &assets), build("x = 1", &assets));
    }
}
