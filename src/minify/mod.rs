//! Minification engine: content kinds and transform dispatch.
//!
//! The engine is stateless. Each call picks exactly one transform adapter
//! through [`ContentKind::transform`] and measures input/output sizes as
//! UTF-8 byte lengths.
//!
//! # Modules
//!
//! - [`script`] - JavaScript minification (oxc)
//! - [`stylesheet`] - CSS minification (lightningcss)
//! - [`markup`] - HTML minification (minify-html)

pub mod markup;
pub mod script;
pub mod stylesheet;

use serde::{Deserialize, Serialize};

/// Errors produced by transform adapters.
///
/// A transform either fully succeeds or fails; no partial output is kept.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The input could not be parsed by the transform.
    #[error("{0}")]
    Parse(String),

    /// The transform failed while rewriting or printing the output.
    #[error("{0}")]
    Emit(String),
}

/// Uniform contract every transform adapter satisfies.
pub type Transform = fn(&str) -> Result<String, TransformError>;

/// Supported input formats.
///
/// Wire names follow the HTTP contract: `js`, `css`, `html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "js")]
    Script,
    #[serde(rename = "css")]
    Stylesheet,
    #[serde(rename = "html")]
    Markup,
}

/// Kind-to-adapter dispatch table.
///
/// Supporting a new format is one row here plus one adapter module.
const TRANSFORMS: [(ContentKind, Transform); 3] = [
    (ContentKind::Script, script::minify),
    (ContentKind::Stylesheet, stylesheet::minify),
    (ContentKind::Markup, markup::minify),
];

impl ContentKind {
    /// Resolves the transform adapter for this kind.
    pub fn transform(self) -> Transform {
        TRANSFORMS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, transform)| *transform)
            .unwrap_or_else(|| unreachable!("every kind has a dispatch table row"))
    }

    /// Infers the kind from a file name's extension, case-insensitively.
    ///
    /// Returns `None` for unrecognized extensions so callers can keep their
    /// previously selected kind.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" => Some(Self::Script),
            "css" => Some(Self::Stylesheet),
            "html" | "htm" => Some(Self::Markup),
            _ => None,
        }
    }

    /// Conventional file name for exported output.
    pub fn output_file_name(self) -> &'static str {
        match self {
            Self::Script => "output.min.js",
            Self::Stylesheet => "output.min.css",
            Self::Markup => "output.min.html",
        }
    }

    /// Wire name (`js`, `css`, `html`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::Stylesheet => "css",
            Self::Markup => "html",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful minification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyOutcome {
    pub minified: String,
    /// UTF-8 byte length of the input.
    pub original_size: usize,
    /// UTF-8 byte length of the output.
    pub minified_size: usize,
}

/// Minifies `code` as the given kind.
///
/// # Errors
///
/// Returns [`TransformError`] when the underlying transform rejects the
/// input or fails internally. The caller decides how to surface it; the
/// engine itself keeps no state between calls.
pub fn minify(kind: ContentKind, code: &str) -> Result<MinifyOutcome, TransformError> {
    let minified = kind.transform()(code)?;

    Ok(MinifyOutcome {
        original_size: code.len(),
        minified_size: minified.len(),
        minified,
    })
}
