//! End-to-end tests for the HTTP contract, driven in-process through the router.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use demo_api::{create_app, AppConfig};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn app() -> Router {
    create_app(&AppConfig::default())
}

fn production_app() -> Router {
    create_app(&AppConfig {
        environment: "production".to_string(),
        ..AppConfig::default()
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_returns_service_info() {
    let (status, _, body) = send(app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Jenkins CI/CD Demo API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], "development");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn root_reports_configured_environment() {
    let (_, _, body) = send(production_app(), get("/")).await;
    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn health_reports_non_decreasing_uptime() {
    let app = app();

    let (status, _, first) = send(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "healthy");
    assert!(first["timestamp"].is_string());

    let (_, _, second) = send(app, get("/health")).await;
    let first = first["uptime"].as_f64().unwrap();
    let second = second["uptime"].as_f64().unwrap();
    assert!(first >= 0.0);
    assert!(second >= first);
}

#[tokio::test]
async fn list_users_returns_seed() {
    let (status, _, body) = send(app(), get("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(body["count"], 3);
    assert_eq!(
        users[0],
        json!({ "id": 1, "name": "Alice", "role": "DevOps Engineer" })
    );
    assert_eq!(users[1]["name"], "Bob");
    assert_eq!(users[2]["role"], "SRE");
}

#[tokio::test]
async fn create_user_with_valid_data() {
    let (status, _, body) = send(
        app(),
        post_json("/api/users", r#"{"name":"Test User","role":"QA Engineer"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["name"], "Test User");
    assert_eq!(body["user"]["role"], "QA Engineer");
    assert!(body["user"]["id"].as_i64().unwrap() > 0);
    let created_at = body["user"]["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn create_user_with_form_body() {
    let (status, _, body) = send(
        app(),
        post_form("/api/users", "name=Test+User&role=QA%20Engineer"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "Test User");
    assert_eq!(body["user"]["role"], "QA Engineer");
}

#[tokio::test]
async fn create_user_requires_name_and_role() {
    let expected = json!({ "error": "Name and role are required" });

    for payload in [
        r#"{"role":"Developer"}"#,
        r#"{"name":"Test User"}"#,
        r#"{}"#,
        r#"{"name":"","role":"Developer"}"#,
        r#"{"name":"Test User","role":null}"#,
    ] {
        let (status, _, body) = send(app(), post_json("/api/users", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body, expected, "payload: {payload}");
    }
}

#[tokio::test]
async fn create_user_without_content_type_is_missing_fields() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .body(Body::from(r#"{"name":"Test User","role":"QA Engineer"}"#))
        .unwrap();

    let (status, _, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and role are required");
}

#[tokio::test]
async fn created_users_are_not_listed() {
    let app = app();

    for i in 0..3 {
        let payload = format!(r#"{{"name":"User {i}","role":"Tester"}}"#);
        let (status, _, _) = send(app.clone(), post_json("/api/users", &payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, _, body) = send(app, get("/api/users")).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_json_is_a_server_error() {
    let (status, _, body) = send(app(), post_json("/api/users", r#"{"name": "#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Something went wrong!");
    let message = body["message"].as_str().unwrap();
    assert_ne!(message, "Internal server error");
    assert!(message.contains("Invalid JSON body"));
}

#[tokio::test]
async fn malformed_json_detail_hidden_outside_development() {
    let (status, _, body) =
        send(production_app(), post_json("/api/users", "not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Something went wrong!", "message": "Internal server error" })
    );
}

#[tokio::test]
async fn oversized_body_is_a_server_error() {
    let name = "x".repeat(200 * 1024);
    let payload = format!(r#"{{"name":"{name}","role":"QA"}}"#);

    let (status, _, body) = send(app(), post_json("/api/users", &payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Something went wrong!");
}

#[tokio::test]
async fn malformed_json_fails_on_every_route() {
    let get_with_body = Request::builder()
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{bad"))
        .unwrap();

    for request in [get_with_body, post_json("/nope", "{bad")] {
        let (status, _, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong!");
    }
}

#[tokio::test]
async fn json_suffix_media_type_is_not_parsed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/vnd.api+json")
        .body(Body::from(r#"{"name":"Test User","role":"QA Engineer"}"#))
        .unwrap();

    let (status, _, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and role are required");
}

#[tokio::test]
async fn routes_ignore_trailing_slash_and_case() {
    for uri in ["/health/", "/HEALTH", "/Health/"] {
        let (status, _, body) = send(app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK, "uri: {uri}");
        assert_eq!(body["status"], "healthy", "uri: {uri}");
    }

    let (status, _, body) = send(app(), get("/api/users/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let (status, _, body) = send(
        app(),
        post_json("/API/Users/", r#"{"name":"Test User","role":"QA Engineer"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "Test User");
}

#[tokio::test]
async fn not_found_path_is_the_raw_request_path() {
    let (status, _, body) = send(app(), get("/Missing/Route/?Q=1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/Missing/Route/?Q=1");
}

#[tokio::test]
async fn unknown_route_returns_404_with_path() {
    let (status, _, body) = send(app(), get("/unknown-route")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "Route not found", "path": "/unknown-route" })
    );
}

#[tokio::test]
async fn not_found_path_keeps_query_string() {
    let (status, _, body) = send(app(), get("/api/unknown?x=1&y=two")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/api/unknown?x=1&y=two");
}

#[tokio::test]
async fn unsupported_method_is_not_found() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/api/users");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let (_, headers, _) = send(app(), get("/health")).await;

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(headers["referrer-policy"], "no-referrer");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("strict-transport-security"));
}

#[tokio::test]
async fn error_responses_carry_security_headers() {
    let (_, headers, _) = send(app(), get("/nope")).await;
    assert_eq!(headers["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/users")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/users")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(app(), request).await;
    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
