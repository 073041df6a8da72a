//! Minify JavaScript code.
//!
//! This module uses the [`oxc`](https://oxc.rs) toolchain under the hood:
//! parse, compress + mangle, then re-print without whitespace.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_compat::EngineTargets;
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use oxc_syntax::es_target::ESTarget;

use super::TransformError;

/// Minifies a JavaScript string.
///
/// Input is parsed as a module, the permissive superset for pasted
/// snippets. Compression targets ES2018 output semantics; identifier
/// mangling is limited to names the minifier proves safe to rename.
///
/// # Errors
///
/// Returns [`TransformError::Parse`] when the input is not valid
/// JavaScript.
pub fn minify(source: &str) -> Result<String, TransformError> {
    let allocator = Allocator::default();

    let parsed = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if let Some(error) = parsed.errors.first() {
        return Err(TransformError::Parse(error.to_string()));
    }

    let mut program = parsed.program;

    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions {
            target: EngineTargets::from_target(&ESTarget::ES2018.to_string())
                .expect("ES2018 is a valid compression target"),
            ..CompressOptions::default()
        }),
    };
    let minified = Minifier::new(options).minify(&allocator, &mut program);

    let output = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            ..CodegenOptions::default()
        })
        .with_scoping(minified.scoping)
        .build(&program);

    Ok(output.code)
}

#[cfg(test)]
mod tests {
    use super::minify;

    #[test]
    fn test_minify_strips_whitespace_and_mangles() {
        let input = "function add(first, second) {\n  return first + second;\n}\n";

        let result = minify(input).unwrap();

        assert!(result.len() < input.len());
        assert!(!result.contains('\n'));
        // The top-level name survives; parameters are fair game for renaming.
        assert!(result.contains("add"));
    }

    #[test]
    fn test_minify_is_non_growing_on_reminify() {
        let input = "function add(first, second) {\n  return first + second;\n}\n";

        let once = minify(input).unwrap();
        let twice = minify(&once).unwrap();

        assert!(twice.len() <= once.len());
    }

    #[test]
    fn test_minify_rejects_invalid_syntax() {
        assert!(minify("function (").is_err());
    }

    #[test]
    fn test_minify_empty_input() {
        assert!(minify("").unwrap().trim().is_empty());
    }
}
