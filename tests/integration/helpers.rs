//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use sitehub_api::AppState;
use sitehub_core::config::AppConfig;
use sitehub_database::MemorySiteInfoStore;
use sitehub_service::SiteInfoService;
use sitehub_storage::{ImageService, LocalStorageProvider};

/// Secret the test app verifies admin tokens with.
pub const JWT_SECRET: &str = "integration-test-secret";

/// Smallest byte sequence the image store accepts as PNG.
pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Image storage root, removed on drop
    _data_dir: TempDir,
}

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    role: &'a str,
    exp: i64,
}

impl TestApp {
    /// Create a new test application over an in-memory store.
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");

        let mut config = AppConfig::default();
        config.storage.data_root = data_dir.path().display().to_string();
        config.storage.public_base_url = "http://localhost:8080".to_string();
        config.auth.jwt_secret = JWT_SECRET.to_string();
        config.site.website_name = "landing-page".to_string();

        let provider = Arc::new(
            LocalStorageProvider::new(data_dir.path())
                .await
                .expect("Failed to init storage"),
        );
        let images = Arc::new(ImageService::new(provider, &config.storage));
        let site_info = SiteInfoService::new(
            Arc::new(MemorySiteInfoStore::new()),
            images.clone(),
            config.site.website_name.clone(),
        );
        site_info.seed().await.expect("Failed to seed document");

        let router = sitehub_api::router::build_router(AppState::new(
            config.clone(),
            site_info,
            images,
        ));

        Self {
            router,
            config,
            _data_dir: data_dir,
        }
    }

    /// A valid admin token.
    pub fn admin_token(&self) -> String {
        self.token_with_role("admin", 3600)
    }

    /// A token signed with the test secret, carrying `role` and expiring
    /// `expires_in` seconds from now.
    pub fn token_with_role(&self, role: &str, expires_in: i64) -> String {
        let claims = TestClaims {
            sub: "admin-1",
            role,
            exp: chrono::Utc::now().timestamp() + expires_in,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .expect("Failed to sign token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body_str, token).await
    }

    /// Send `body` as is, labelled as JSON.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body_str: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            bytes,
            content_type,
        }
    }

    /// Status of a GET carrying `authorization` verbatim.
    pub async fn status_with_authorization(&self, path: &str, authorization: &str) -> StatusCode {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header("Authorization", authorization)
            .body(Body::empty())
            .expect("Failed to build request");

        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request")
            .status()
    }

    /// Request as admin.
    pub async fn admin(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let token = self.admin_token();
        self.request(method, path, body, Some(&token)).await
    }
}

/// An image payload as clients send it.
pub fn png_payload() -> Value {
    json!({"format": "png", "data": BASE64.encode(PNG)})
}

/// The path part of an image URL handed out by the test app.
pub fn image_path(url: &str) -> &str {
    url.strip_prefix("http://localhost:8080")
        .expect("URL issued by the test app")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Content-Type header
    pub content_type: Option<String>,
}
