//! End-to-end workbench flow over the in-process gateway.

use minify_service::minify::ContentKind;
use minify_service::utils::byte_size::format_reduction;
use minify_service::workbench::{LocalGateway, Workbench, WorkbenchError};

#[tokio::test]
async fn test_ingest_and_minify_script_file() {
    let mut workbench = Workbench::new(LocalGateway);

    workbench.ingest_file(
        "app.JS",
        "function add(first, second) {\n  return first + second;\n}\n".to_string(),
    );

    assert_eq!(workbench.kind(), ContentKind::Script);

    let outcome = workbench.minify().await.unwrap();

    assert!(outcome.minified_size < outcome.original_size);
    assert_eq!(workbench.result(), outcome.minified);
    assert_eq!(workbench.output_file_name(), "output.min.js");
    assert!(workbench.reduction().unwrap() > 0.0);
}

#[tokio::test]
async fn test_unknown_extension_keeps_selected_kind() {
    let mut workbench = Workbench::new(LocalGateway);
    workbench.set_kind(ContentKind::Stylesheet);

    workbench.ingest_file("notes.txt", ".a {\n  color: black;\n}\n".to_string());

    assert_eq!(workbench.kind(), ContentKind::Stylesheet);

    let outcome = workbench.minify().await.unwrap();
    assert!(outcome.minified.contains(".a"));
    assert_eq!(workbench.output_file_name(), "output.min.css");
}

#[tokio::test]
async fn test_empty_source_is_refused_without_a_request() {
    let mut workbench = Workbench::new(LocalGateway);

    let err = workbench.minify().await.unwrap_err();

    assert!(matches!(err, WorkbenchError::EmptySource));
}

#[tokio::test]
async fn test_transform_error_surfaces_as_gateway_message() {
    let mut workbench = Workbench::new(LocalGateway);
    workbench.set_source("function (");

    let err = workbench.minify().await.unwrap_err();

    assert!(matches!(err, WorkbenchError::Gateway(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_reduction_readout_formats_like_the_page() {
    let mut workbench = Workbench::new(LocalGateway);
    workbench.ingest_file(
        "style.css",
        ".foo {\n  color: black;\n  margin: 0px;\n}\n".to_string(),
    );

    let outcome = workbench.minify().await.unwrap();

    let rendered = format_reduction(outcome.original_size, outcome.minified_size);
    assert!(rendered.ends_with('%'));
    // Two decimal places, e.g. "42.50%".
    let digits = rendered.trim_end_matches('%');
    let (_, decimals) = digits.split_once('.').unwrap();
    assert_eq!(decimals.len(), 2);
}
