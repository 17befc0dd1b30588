//! Full-application integration tests.
//!
//! These use the same app factory as the binary, so the middleware stack,
//! OpenAPI spec, and shared state are all wired exactly as in production.

use actix_web::{http::StatusCode, test};
use travelplan_api::{ApiSettings, DbSettings, Settings, create_base_app};

fn test_settings() -> Settings {
    Settings {
        api: ApiSettings {
            apikey: "test-key".to_string(),
            model: "gemini-pro".to_string(),
            base_url: "http://127.0.0.1:1/v1beta".to_string(),
        },
        db: DbSettings {
            host: "127.0.0.1".to_string(),
            user: "travelplan".to_string(),
            password: "secret".to_string(),
            database: "travelplan".to_string(),
            port: 1,
        },
    }
}

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON body");
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON body");
    assert!(json.get("version").is_some_and(|v| v.is_string()));
    assert!(json.get("commit").is_some_and(|v| v.is_string()));
    assert!(json.get("build_time").is_some_and(|v| v.is_string()));
    assert_eq!(json["version"].as_str().unwrap(), "0.1.0");
}

#[actix_web::test]
async fn test_input_page_integration() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("text/html"));

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("都道府県を選択してください"));
    assert!(body_str.contains("予定日数を選択してください"));
}

#[actix_web::test]
async fn test_request_id_header_echoed() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "test-trace-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed = resp
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok());
    assert_eq!(echoed, Some("test-trace-42"));
}

#[actix_web::test]
async fn test_request_id_generated_when_absent() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .expect("x-request-id header should be set");
    assert!(!request_id.is_empty());
}

#[actix_web::test]
async fn test_openapi_spec_served() {
    let app = test::init_service(create_base_app(test_settings())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON spec");
    assert_eq!(json["info"]["title"].as_str().unwrap(), "Travelplan API");
}
