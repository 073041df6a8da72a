mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use minify_service::api::handlers::minify_handler;
use serde_json::json;

fn minify_server() -> TestServer {
    let app = Router::new()
        .route("/minify", post(minify_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_minify_js_success() {
    let server = minify_server();
    let code = "function add(a,b){return a+b;}";

    let response = server
        .post("/minify")
        .json(&json!({ "code": code, "type": "js" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let minified = json["minified"].as_str().unwrap();

    assert_eq!(json["originalSize"], code.len());
    assert_eq!(json["minifiedSize"], minified.len());
    assert!(minified.len() < code.len());
    assert!(minified.contains("add"));
}

#[tokio::test]
async fn test_minify_css_success() {
    let server = minify_server();
    let code = ".foo {\n  color: black;\n  margin: 0px;\n}\n";

    let response = server
        .post("/minify")
        .json(&json!({ "code": code, "type": "css" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let minified = json["minified"].as_str().unwrap();

    assert_eq!(json["originalSize"], code.len());
    assert_eq!(json["minifiedSize"], minified.len());
    assert!(minified.contains(".foo"));
    assert!(minified.len() < code.len());
}

#[tokio::test]
async fn test_minify_html_success() {
    let server = minify_server();
    let code = "<p>\n    hello <!-- note -->world\n</p>\n";

    let response = server
        .post("/minify")
        .json(&json!({ "code": code, "type": "html" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let minified = json["minified"].as_str().unwrap();

    assert_eq!(json["originalSize"], code.len());
    assert_eq!(json["minifiedSize"], minified.len());
    assert!(!minified.contains("note"));
    assert!(minified.len() < code.len());
}

#[tokio::test]
async fn test_minify_sizes_count_utf8_bytes() {
    let server = minify_server();
    // 'é' is two bytes in UTF-8.
    let code = ".héllo {\n  color: black;\n}\n";

    let response = server
        .post("/minify")
        .json(&json!({ "code": code, "type": "css" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalSize"], code.len());
    assert!(code.len() > code.chars().count());
}

#[tokio::test]
async fn test_minify_missing_type_is_rejected() {
    let server = minify_server();

    let response = server
        .post("/minify")
        .json(&json!({ "code": "var a = 1;" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_minify_unknown_type_is_rejected() {
    let server = minify_server();

    let response = server
        .post("/minify")
        .json(&json!({ "code": "var a = 1;", "type": "xml" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_minify_non_string_code_is_rejected() {
    let server = minify_server();

    let response = server
        .post("/minify")
        .json(&json!({ "code": 42, "type": "js" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_minify_missing_code_is_rejected() {
    let server = minify_server();

    let response = server.post("/minify").json(&json!({ "type": "js" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_minify_unparseable_js_is_a_server_fault() {
    let server = minify_server();

    let response = server
        .post("/minify")
        .json(&json!({ "code": "function (", "type": "js" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_reminified_js_is_non_growing() {
    let server = minify_server();
    let code = "function add(first, second) {\n  return first + second;\n}\n";

    let first = server
        .post("/minify")
        .json(&json!({ "code": code, "type": "js" }))
        .await;
    first.assert_status_ok();
    let first = first.json::<serde_json::Value>();

    let second = server
        .post("/minify")
        .json(&json!({ "code": first["minified"], "type": "js" }))
        .await;
    second.assert_status_ok();
    let second = second.json::<serde_json::Value>();

    assert!(
        second["minifiedSize"].as_u64().unwrap() <= first["minifiedSize"].as_u64().unwrap()
    );
}
