//! DTOs for the minification endpoint.

use serde::{Deserialize, Serialize};

use crate::minify::{ContentKind, MinifyOutcome};

/// Request to minify a piece of source text.
#[derive(Debug, Deserialize)]
pub struct MinifyRequest {
    /// The source text. Must be a JSON string; anything else is rejected.
    pub code: String,

    /// Declared content kind: `js`, `css` or `html`.
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

/// Successful minification result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyResponse {
    pub minified: String,
    /// UTF-8 byte length of the submitted source.
    pub original_size: usize,
    /// UTF-8 byte length of the minified output.
    pub minified_size: usize,
}

impl From<MinifyOutcome> for MinifyResponse {
    fn from(outcome: MinifyOutcome) -> Self {
        Self {
            minified: outcome.minified,
            original_size: outcome.original_size,
            minified_size: outcome.minified_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_wire_type_names() {
        let request: MinifyRequest =
            serde_json::from_str(r#"{"code": "a{}", "type": "css"}"#).unwrap();

        assert_eq!(request.code, "a{}");
        assert_eq!(request.kind, ContentKind::Stylesheet);
    }

    #[test]
    fn test_request_rejects_non_string_code() {
        assert!(serde_json::from_str::<MinifyRequest>(r#"{"code": 42, "type": "js"}"#).is_err());
        assert!(serde_json::from_str::<MinifyRequest>(r#"{"type": "js"}"#).is_err());
    }

    #[test]
    fn test_response_uses_camel_case_sizes() {
        let response = MinifyResponse::from(MinifyOutcome {
            minified: "a{}".to_string(),
            original_size: 10,
            minified_size: 3,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["originalSize"], 10);
        assert_eq!(json["minifiedSize"], 3);
        assert_eq!(json["minified"], "a{}");
    }
}
