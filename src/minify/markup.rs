//! Minify HTML code.
//!
//! This module uses [`minify_html`] under the hood. Embedded `<style>` and
//! `<script>` content is minified recursively by the library.

use minify_html::{Cfg, minify as minify_bytes};

use super::TransformError;

/// Minifies an HTML string.
///
/// Collapses whitespace, strips comments and redundant attributes, and
/// minifies embedded CSS and JavaScript.
///
/// # Errors
///
/// Returns [`TransformError::Emit`] when the minified output is not valid
/// UTF-8. The library itself is lenient and does not reject malformed
/// markup.
pub fn minify(source: &str) -> Result<String, TransformError> {
    let cfg = Cfg {
        minify_css: true,
        minify_js: true,
        ..Cfg::default()
    };

    String::from_utf8(minify_bytes(source.as_bytes(), &cfg))
        .map_err(|e| TransformError::Emit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::minify;

    #[test]
    fn test_minify_collapses_whitespace() {
        let input = "<p>\n    hello\n    world\n</p>\n";

        let result = minify(input).unwrap();

        assert!(result.len() < input.len());
        assert!(result.contains("hello"));
        assert!(!result.contains("\n    "));
    }

    #[test]
    fn test_minify_strips_comments() {
        let result = minify("<p>keep<!-- drop me --></p>").unwrap();

        assert!(result.contains("keep"));
        assert!(!result.contains("drop me"));
    }

    #[test]
    fn test_minify_handles_embedded_style() {
        let input = "<style>\n.a {\n  color: black;\n}\n</style><p>x</p>";

        let result = minify(input).unwrap();

        assert!(result.len() < input.len());
        assert!(result.contains(".a"));
    }
}
