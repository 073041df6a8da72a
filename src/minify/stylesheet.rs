//! Minify CSS code.
//!
//! This module uses [`lightningcss`] under the hood with its default
//! optimization level.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use super::TransformError;

/// Minifies a CSS string.
///
/// # Errors
///
/// Returns [`TransformError::Parse`] for stylesheets lightningcss cannot
/// parse and [`TransformError::Emit`] when rewriting or printing fails.
pub fn minify(source: &str) -> Result<String, TransformError> {
    let mut style_sheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| TransformError::Parse(e.to_string()))?;

    style_sheet
        .minify(MinifyOptions::default())
        .map_err(|e| TransformError::Emit(e.to_string()))?;

    let output = style_sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| TransformError::Emit(e.to_string()))?;

    Ok(output.code)
}
