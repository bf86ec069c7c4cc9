use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use super::{json_config, routes, state::AppState};
use crate::resolver::tests::StubBackend;

async fn call(
    backend: Arc<StubBackend>,
    req: test::TestRequest,
) -> (StatusCode, Option<Value>) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(backend)))
            .app_data(json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).ok();
    (status, json)
}

#[actix_web::test]
async fn test_styles_endpoint_lists_catalog() {
    let backend = StubBackend::succeeding("unused");
    let (status, body) = call(backend.clone(), test::TestRequest::get().uri("/styles")).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 15);
    assert_eq!(body["styles"].as_array().unwrap().len(), 15);
    assert_eq!(
        body["styles"][14],
        json!({
            "id": "fantasy",
            "name": "Fantasy",
            "description": "fantasy art, magical creatures, mystical"
        })
    );

    let (_, again) = call(backend, test::TestRequest::get().uri("/styles")).await;
    assert_eq!(Some(body), again);
}

#[actix_web::test]
async fn test_generate_demo() {
    let backend = StubBackend::succeeding("unused");
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "text": "a castle", "style": "watercolor", "size": "512x512" }));
    let (status, body) = call(backend.clone(), req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["style"], "watercolor");
    assert_eq!(body["style_name"], "Watercolor");
    assert_eq!(body["size"], "512x512");
    assert!(body["image_url"].as_str().unwrap().contains("w=512&h=512"));
    assert!(body["generation_time"].as_f64().unwrap() >= 0.0);
    assert!(body["request_id"].as_str().is_some());
    assert_eq!(backend.calls(), 0);
}

#[actix_web::test]
async fn test_generate_with_null_api_key_is_demo() {
    let backend = StubBackend::succeeding("unused");
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "text": "a castle", "api_key": null }));
    let (status, body) = call(backend, req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["style"], "fantasy");
    assert_eq!(body["size"], "1024x1024");
}

#[actix_web::test]
async fn test_generate_generated() {
    let backend = StubBackend::succeeding("https://cdn.example.com/castle.png");
    let req = test::TestRequest::post().uri("/generate").set_json(json!({
        "text": "a castle",
        "style": "pixel_art",
        "api_key": "sk-test"
    }));
    let (status, body) = call(backend.clone(), req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "generated");
    assert_eq!(body["image_url"], "https://cdn.example.com/castle.png");
    assert_eq!(body["quality"], "standard");
    assert_eq!(
        body["prompt_used"],
        "pixel art, retro gaming style, 8-bit: a castle"
    );
    assert_eq!(backend.calls(), 1);
}

#[actix_web::test]
async fn test_generate_fallback_reports_success() {
    let backend = StubBackend::failing("Error code: 429 - You exceeded your current quota");
    let req = test::TestRequest::post().uri("/generate").set_json(json!({
        "text": "a castle",
        "api_key": "sk-test"
    }));
    let (status, body) = call(backend, req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["mode"], "fallback");
    assert_eq!(body["error_type"], "billing_issue");
    assert_eq!(body["recovery_strategy"], "demo_image");
    assert!(body["error"].as_str().unwrap().contains("quota"));
    assert!(body["image_url"]
        .as_str()
        .unwrap()
        .contains("w=1024&h=1024"));
}

#[actix_web::test]
async fn test_generate_invalid_style() {
    let backend = StubBackend::succeeding("unused");
    let req = test::TestRequest::post().uri("/generate").set_json(json!({
        "text": "a castle",
        "style": "Fantasy",
        "api_key": "sk-test"
    }));
    let (status, body) = call(backend.clone(), req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error_type"], "invalid_style");
    let available = body["available_styles"].as_array().unwrap();
    assert_eq!(available.len(), 15);
    assert_eq!(available[0], "business");
    assert_eq!(backend.calls(), 0);
}

#[actix_web::test]
async fn test_generate_invalid_size() {
    let backend = StubBackend::succeeding("unused");
    let req = test::TestRequest::post().uri("/generate").set_json(json!({
        "text": "a castle",
        "size": "1024*1024",
        "api_key": "sk-test"
    }));
    let (status, body) = call(backend.clone(), req).await;
    let body = body.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_size");
    assert!(body.get("available_styles").is_none());
    assert_eq!(backend.calls(), 0);
}

#[actix_web::test]
async fn test_generate_missing_text() {
    let backend = StubBackend::succeeding("unused");
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "style": "anime" }));
    let (status, body) = call(backend, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap()["error_type"], "invalid_request");
}

#[actix_web::test]
async fn test_openai_probe() {
    let req = test::TestRequest::get().uri("/test-openai?api_key=sk-test");
    let (status, body) = call(StubBackend::succeeding("unused"), req).await;
    let body = body.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["models_available"], 2);

    let req = test::TestRequest::get().uri("/test-openai?api_key=sk-bad");
    let (status, body) = call(StubBackend::failing("Incorrect API key provided"), req).await;
    let body = body.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["error_type"], "auth_error");

    let req = test::TestRequest::get().uri("/test-openai");
    let (status, body) = call(StubBackend::succeeding("unused"), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap()["error_type"], "missing_api_key");
}

#[actix_web::test]
async fn test_health_get_and_head() {
    let (status, body) = call(
        StubBackend::succeeding("unused"),
        test::TestRequest::get().uri("/health"),
    )
    .await;
    let body = body.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["styles_available"], 15);

    let (status, body) = call(
        StubBackend::succeeding("unused"),
        test::TestRequest::default()
            .method(actix_web::http::Method::HEAD)
            .uri("/health"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_none());
}
