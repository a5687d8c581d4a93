// Router tests: form, /generate, PWA assets, health
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use evolve::config::BrandConfig;
use evolve::service::StrategyService;
use evolve::web;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    web::router(Arc::new(StrategyService::offline(BrandConfig::default())))
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"<form action="/generate" method="post">"#));
    assert!(body.contains(r#"name="game_industry""#));
}

#[tokio::test]
async fn test_generate_returns_strategy_page() {
    let response = app()
        .oneshot(form_post(
            "intent=Apex+Legends+ranked+tips&category=gaming&game_industry=Apex+Legends&audience=gamers",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<pre>"));
    assert!(body.contains("STRATEGY FOR: Apex Legends ranked tips"));
    assert_eq!(body.matches("0-3s:").count(), 1);
    assert!(body.contains("source: template"));
}

#[tokio::test]
async fn test_generate_without_industry() {
    let response = app()
        .oneshot(form_post(
            "intent=focus+supplements&category=fitness&audience=students",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("focus supplements"));
    assert!(!body.contains("None"));
}

#[tokio::test]
async fn test_generate_unknown_category_is_not_an_error() {
    let response = app()
        .oneshot(form_post("intent=x&category=knitting&audience=general"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generate_missing_field_is_bad_request() {
    let response = app()
        .oneshot(form_post("intent=x&category=gaming"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert_eq!(body, "missing required field: audience");
}

#[tokio::test]
async fn test_generate_escapes_user_input() {
    let response = app()
        .oneshot(form_post(
            "intent=%3Cscript%3Ealert(1)%3C%2Fscript%3E&category=gaming&audience=gamers",
        ))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_manifest_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/manifest.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let manifest: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(manifest["start_url"], "/");
    assert_eq!(manifest["short_name"], "E-Volve.ai");
}

#[tokio::test]
async fn test_service_worker_content_type() {
    let response = app()
        .oneshot(Request::builder().uri("/sw.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
    let body = body_string(response).await;
    assert!(body.contains("addEventListener('fetch'"));
}

#[tokio::test]
async fn test_health_reports_external_generation() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_string(response).await;
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["external_generation"], false);
}
