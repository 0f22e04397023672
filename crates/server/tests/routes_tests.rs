//! HTTP boundary tests
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use sitemeta_core::{Extractor, Fetcher, Result, SitemetaError};
use tower::ServiceExt;

const SCENARIO_A: &str = r#"<html><head><title>Hi</title><meta name="description" content="desc text"><link type="application/rss+xml" href="/feed.xml"></head></html>"#;

/// Maps well-known hosts to canned pages and fails for everything else.
struct FakeWeb;

impl Fetcher for FakeWeb {
    async fn fetch(&self, url: &str) -> Result<String> {
        match url {
            "https://blog.example/" => Ok(SCENARIO_A.to_string()),
            "https://bare.example/" => Ok("<html><body><p>nothing</p></body></html>".to_string()),
            "https://broken.example/" => Ok("<html><head><title>Ok</title><body><div><p>unclosed".to_string()),
            "https://slow.example/" => Err(SitemetaError::Timeout { timeout: 30 }),
            "not a url" => Err(SitemetaError::InvalidUrl("relative URL without a base".to_string())),
            _ => Err(SitemetaError::ConfigError(format!("unexpected fetch of {}", url))),
        }
    }
}

async fn get(uri: &str) -> Response {
    let app = sitemeta_server::app(Extractor::with_fetcher(FakeWeb));
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_blog_info_full_record() {
    let response = get("/api/blog-info?url=https%3A%2F%2Fblog.example%2F").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"title": "Hi", "description": "desc text", "rssUrl": "/feed.xml"})
    );
}

#[tokio::test]
async fn test_blog_info_empty_fields_present() {
    let response = get("/api/blog-info?url=https://bare.example/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"title": "", "description": "", "rssUrl": ""})
    );
}

#[tokio::test]
async fn test_blog_info_malformed_page() {
    let response = get("/api/blog-info?url=https://broken.example/").await;
    let json = body_json(response).await;
    assert_eq!(json["title"], "Ok");
    assert_eq!(json["rssUrl"], "");
}

#[tokio::test]
async fn test_missing_url_produces_no_output() {
    for uri in ["/api/blog-info", "/api/blog-info?url=", "/api/blog-info?other=1"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty(), "{}", uri);
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let response = get("/api/blog-info?url=https://slow.example/").await;
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_invalid_url() {
    let response = get("/api/blog-info?url=not%20a%20url").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].as_str().unwrap().contains("Invalid URL"));
}

#[tokio::test]
async fn test_unreachable_host_over_http() {
    let app = sitemeta_server::app(Extractor::new().unwrap());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/blog-info?url=http://127.0.0.1:1/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await.get("title").is_none());
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers() {
    let app = sitemeta_server::app(Extractor::with_fetcher(FakeWeb));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/blog-info?url=https://blog.example/")
                .header("Origin", "https://directory.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("access-control-allow-origin"));
}
