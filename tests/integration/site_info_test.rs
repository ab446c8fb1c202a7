//! Integration tests for the site-info panel and website routes.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{TestApp, image_path, png_payload};

fn advantage(english: &str, german: &str) -> Value {
    json!({
        "englishTitle": english,
        "englishContent": "Fast delivery",
        "germanTitle": german,
        "germanContent": "Schnelle Lieferung",
        "icon": png_payload(),
    })
}

#[tokio::test]
async fn test_advantage_lifecycle() {
    let app = TestApp::new().await;

    let response = app
        .admin("POST", "/panel/site-info/advantage", Some(advantage(" Speed ", "Tempo")))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    let entry = &response.body["outputs"]["advantage"];
    assert_eq!(entry["englishTitle"], "Speed");
    let id = entry["_id"].as_str().expect("id").to_string();
    let icon = entry["icon"].as_str().expect("icon url").to_string();

    let response = app.request("GET", "/website/site-info/advantage", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["outputs"]["count"], 1);
    assert_eq!(response.body["outputs"]["advantages"][0]["_id"], id.as_str());

    let path = format!("/panel/site-info/advantage/{id}");
    let response = app
        .admin("PATCH", &path, Some(json!({"updates": {"germanContent": "Neu"}})))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["outputs"]["advantage"]["germanContent"], "Neu");
    assert_eq!(response.body["outputs"]["advantage"]["icon"], icon.as_str());

    let response = app.admin("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "outputs": {}}));

    let response = app
        .request("GET", &format!("/website/site-info/advantage/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(
        response.body["error"]["message"],
        "Requested content was not found"
    );

    let response = app.request("GET", image_path(&icon), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_title_is_rejected() {
    let app = TestApp::new().await;
    app.admin("POST", "/panel/site-info/advantage", Some(advantage("Speed", "Tempo")))
        .await;

    let response = app
        .admin("POST", "/panel/site-info/advantage", Some(advantage("Speed", "Anders")))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        json!({"message": "English title is already taken", "statusCode": 400})
    );

    let response = app.request("GET", "/website/site-info/advantage", None, None).await;
    assert_eq!(response.body["outputs"]["count"], 1);
}

#[tokio::test]
async fn test_add_with_unreadable_body_is_validation_error() {
    let app = TestApp::new().await;
    let token = app.admin_token();

    for body in ["", "{\"englishTitle\": ", "[1, 2"] {
        let response = app
            .send("POST", "/panel/site-info/advantage", body.to_string(), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "body {body:?}");
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.body["error"], "VALIDATION");
    }

    let response = app.request("GET", "/website/site-info/advantage", None, None).await;
    assert_eq!(response.body["outputs"]["count"], 0);
}

#[tokio::test]
async fn test_edit_without_changes() {
    let app = TestApp::new().await;
    let response = app
        .admin("POST", "/panel/site-info/advantage", Some(advantage("Speed", "Tempo")))
        .await;
    let id = response.body["outputs"]["advantage"]["_id"]
        .as_str()
        .expect("id")
        .to_string();

    let response = app
        .admin(
            "PATCH",
            &format!("/panel/site-info/advantage/{id}"),
            Some(json!({"updates": {"colour": "red"}})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["statusCode"], 400);

    let response = app
        .admin(
            "PATCH",
            &format!("/panel/site-info/advantage/{id}"),
            Some(json!({"germanContent": "missing wrapper"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_unknown_collection_and_route() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/website/site-info/blog", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);

    let response = app.request("GET", "/nowhere", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_logo_is_served_after_upload() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/website/site-info/logo", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .admin("PUT", "/panel/site-info/logo", Some(json!({"logo": png_payload()})))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let url = response.body["outputs"]["logo"]
        .as_str()
        .expect("logo url")
        .to_string();
    assert!(url.starts_with("http://localhost:8080/images/"));

    let response = app.request("GET", "/website/site-info/logo", None, None).await;
    assert_eq!(response.body["outputs"]["logo"], url.as_str());

    let response = app.request("GET", image_path(&url), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("image/png"));
    assert_eq!(response.bytes, helpers::PNG);
}

#[tokio::test]
async fn test_logo_with_wrong_format_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .admin(
            "PUT",
            "/panel/site-info/logo",
            Some(json!({"logo": {"format": "gif", "data": "R0lGODlh"}})),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(
        response.body["error"]["message"],
        "Image format 'gif' is not allowed"
    );
}

#[tokio::test]
async fn test_banner_and_footer() {
    let app = TestApp::new().await;

    let response = app
        .admin(
            "PUT",
            "/panel/site-info/banner",
            Some(json!({"englishTitle": "Welcome", "germanTitle": "Willkommen"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["outputs"]["banner"]["germanTitle"], "Willkommen");

    let response = app
        .admin(
            "PUT",
            "/panel/site-info/footer",
            Some(json!({"email": "not-an-email"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .admin(
            "PUT",
            "/panel/site-info/footer",
            Some(json!({"phone": "+49 30 1234", "images": [png_payload()]})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["outputs"]["footer"]["phone"], "+49 30 1234");
    assert_eq!(
        response.body["outputs"]["footer"]["images"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );

    let response = app.request("GET", "/website/site-info/footer", None, None).await;
    assert_eq!(response.body["outputs"]["footer"]["phone"], "+49 30 1234");
}

#[tokio::test]
async fn test_about_us_section() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/website/site-info/about-us", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["outputs"]["aboutUs"]["images"], json!([]));

    let response = app
        .admin(
            "PUT",
            "/panel/site-info/about-us",
            Some(json!({
                "englishTitle": "About us",
                "germanTitle": "Über uns",
                "images": [png_payload()]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let image = response.body["outputs"]["aboutUs"]["images"][0]
        .as_str()
        .expect("image url")
        .to_string();

    let response = app.request("GET", image_path(&image), None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            "/panel/site-info/about-us",
            Some(json!({"englishTitle": "x"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/website/site-info", None, None).await;
    assert_eq!(
        response.body["outputs"]["siteInfo"]["aboutUs"]["germanTitle"],
        "Über uns"
    );
}

#[tokio::test]
async fn test_snapshot_collects_everything() {
    let app = TestApp::new().await;
    app.admin("POST", "/panel/site-info/advantage", Some(advantage("Speed", "Tempo")))
        .await;
    let response = app
        .admin(
            "POST",
            "/panel/site-info/social-network",
            Some(json!({
                "name": "Instagram",
                "link": "https://instagram.com/site",
                "icon": png_payload(),
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app.request("GET", "/website/site-info", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let site = &response.body["outputs"]["siteInfo"];
    assert_eq!(site["websiteName"], "landing-page");
    assert_eq!(site["advantages"].as_array().map(Vec::len), Some(1));
    assert_eq!(site["socialNetworks"][0]["name"], "Instagram");
    assert_eq!(site["members"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
}
