//! Integration tests for API route handlers
//!
//! Tests key endpoints:
//! - GET /robots.txt - The generated robots.txt
//! - GET /health - Liveness check

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use core_rtx::{AgentRules, ContentSignalsPolicy, RobotsConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

use api_rtx::{routes::router, state::AppState};

/// Helper to create a router for a config with a fixed sitemap base URL
fn test_router(config: RobotsConfig) -> axum::Router {
    router(AppState::new(config, Some("https://example.com")).unwrap())
}

/// Helper to read a response body as text
async fn response_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

//
// GET /robots.txt tests
//

#[tokio::test]
async fn test_get_robots_txt_success() {
    let config = RobotsConfig::builder()
        .sitemap("sitemap.xml")
        .agent("*", AgentRules::new().allow("/"))
        .build();

    let response = test_router(config).oneshot(get("/robots.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=UTF-8"
    );

    let body = response_text(response.into_body()).await;
    assert_eq!(body, "Sitemap: https://example.com/sitemap.xml\n\nUser-agent: *\nAllow: /");
}

#[tokio::test]
async fn test_get_robots_txt_default_config_disallows_all() {
    let response = test_router(RobotsConfig::default())
        .oneshot(get("/robots.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_text(response.into_body()).await, "User-agent: *\nDisallow: /");
}

#[tokio::test]
async fn test_get_robots_txt_full_config() {
    let config = RobotsConfig::builder()
        .host("https://example.com")
        .policy(ContentSignalsPolicy::custom("Please be kind."))
        .content_signal("search", true)
        .content_signal("ai_input", false)
        .content_signal("ai_train", true)
        .agent("*", AgentRules::new().allow("/"))
        .agent("Googlebot", AgentRules::new().disallow("/private").allow("/"))
        .custom_text("# note\nUser-agent: Bingbot\nCrawl-delay: 1")
        .build();

    let response = test_router(config).oneshot(get("/robots.txt")).await.unwrap();
    let body = response_text(response.into_body()).await;
    let lines: Vec<&str> = body.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "Host: https://example.com",
            "",
            "# Please be kind.",
            "",
            "Content-Signal: search=yes, ai-input=no, ai-train=yes",
            "",
            "User-agent: *",
            "Allow: /",
            "",
            "User-agent: Googlebot",
            "Disallow: /private",
            "Allow: /",
            "",
            "# note",
            "User-agent: Bingbot",
            "Crawl-delay: 1",
        ]
    );
}

#[tokio::test]
async fn test_get_robots_txt_resolves_against_request_host() {
    let config = RobotsConfig::builder().sitemap("/sitemap.xml").build();
    let app = router(AppState::new(config, None).unwrap());

    let request = Request::builder()
        .uri("/robots.txt")
        .header(header::HOST, "shop.example.org")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response_text(response.into_body()).await;
    assert!(body.starts_with("Sitemap: https://shop.example.org/sitemap.xml\n"));
}

#[tokio::test]
async fn test_get_robots_txt_is_stable_across_requests() {
    let config = RobotsConfig::builder()
        .policy(ContentSignalsPolicy::enabled())
        .agent("*", AgentRules::new().disallow("/admin"))
        .build();
    let app = test_router(config);

    let first = app.clone().oneshot(get("/robots.txt")).await.unwrap();
    let second = app.oneshot(get("/robots.txt")).await.unwrap();
    assert_eq!(
        response_text(first.into_body()).await,
        response_text(second.into_body()).await
    );
}

#[test]
fn test_invalid_app_url_is_rejected() {
    assert!(AppState::new(RobotsConfig::default(), Some("not a url")).is_err());
}

//
// GET /health tests
//

#[tokio::test]
async fn test_health() {
    let response = test_router(RobotsConfig::default())
        .oneshot(get("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_text(response.into_body()).await, "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = test_router(RobotsConfig::default())
        .oneshot(get("/sitemap.xml"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
