//! Integration tests for the admin guard on panel routes.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_panel_requires_token() {
    let app = TestApp::new().await;

    for (method, path) in [
        ("GET", "/panel/site-info"),
        ("GET", "/panel/site-info/advantage"),
        ("POST", "/panel/site-info/advantage"),
        ("PUT", "/panel/site-info/logo"),
        ("DELETE", "/panel/site-info/member/65a1b2c3d4e5f60718293a4b"),
    ] {
        let response = app.request(method, path, Some(json!({})), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
        assert_eq!(response.body["message"], "Missing Authorization header");
    }
}

#[tokio::test]
async fn test_non_admin_role_rejected() {
    let app = TestApp::new().await;
    let token = app.token_with_role("editor", 3600);

    let response = app
        .request("GET", "/panel/site-info/advantage", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Admin role required");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let token = app.token_with_role("admin", -3600);

    let response = app
        .request("GET", "/panel/site-info/banner", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_malformed_header_rejected() {
    let app = TestApp::new().await;
    let status = app
        .status_with_authorization("/panel/site-info/logo", "Basic YWRtaW46YWRtaW4=")
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let status = app
        .status_with_authorization("/panel/site-info/logo", "Bearer ")
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_token_accepted() {
    let app = TestApp::new().await;
    let response = app.admin("GET", "/panel/site-info/advantage", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["outputs"]["count"], 0);
}

#[tokio::test]
async fn test_website_needs_no_token() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/website/site-info/banner", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app.request("POST", "/website/site-info/advantage", Some(json!({})), None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
