//! Script wrappers deferring injected code until the page is ready.

const INDENT: &str = "    ";

/// Wrap `code` in a jQuery document-ready callback.
pub fn wrap_in_document_ready(code: &str) -> String {
  format!("$(function() {{\n{}\n}});", indent(code))
}

/// Wrap `code` so it runs after require.js has loaded jQuery and the Bokeh main module.
pub fn wrap_in_require(code: &str) -> String {
  format!(
    "require([\"jquery\", \"main\"], function($, Bokeh) {{\n{}\n}});",
    indent(&wrap_in_document_ready(code))
  )
}

/// Wrapper matching the loading strategy of the assets.
///
/// Development builds load modules through require.js, so the code must wait for
/// the loader as well as the document.
pub fn js_wrapper(code: &str, dev: bool) -> String {
  if dev {
    wrap_in_require(code)
  } else {
    wrap_in_document_ready(code)
  }
}

fn indent(code: &str) -> String {
  code
    .split('\n')
    .map(|line| format!("{INDENT}{line}"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wraps_single_line_in_document_ready() {
    assert_eq!(js_wrapper("foo", false), "$(function() {\n    foo\n});");
  }

  #[test]
  fn wraps_single_line_in_require_for_dev() {
    assert_eq!(
      js_wrapper("foo", true),
      "require([\"jquery\", \"main\"], function($, Bokeh) {\n    $(function() {\n        foo\n    });\n});"
    );
  }

  #[test]
  fn indents_every_line_of_multiline_code() {
    assert_eq!(
      js_wrapper("var x = 1;\nplot(x);", false),
      "$(function() {\n    var x = 1;\n    plot(x);\n});"
    );
  }
}
