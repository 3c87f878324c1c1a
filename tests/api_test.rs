#![cfg(feature = "server")]

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use pagebrief::server::{router, AppState, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

const PRODUCT_HTML: &str = r#"<html><head><title>Kettle Shop</title></head><body>
<nav><a href="/home">Home</a></nav>
<h1>Steel kettle</h1>
<p>The steel kettle costs $24.99 today. Steel kettles boil water fast.
Our steel kettle ships free. Lunch was fine.</p>
<a href="/buy">Buy</a>
</body></html>"#;

fn app() -> Router {
    let state = AppState::new(ServerConfig::default()).expect("state");
    router(state)
}

/// Serve a tiny upstream site on an ephemeral port.
async fn spawn_origin() -> SocketAddr {
    let origin = Router::new()
        .route("/product", get(|| async { Html(PRODUCT_HTML) }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "gone") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind origin");
    let addr = listener.local_addr().expect("origin addr");
    tokio::spawn(async move {
        axum::serve(listener, origin).await.expect("origin server");
    });
    addr
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn post_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(body.into())
        .expect("request")
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn index_serves_html() {
    let response = app().oneshot(get_request("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let response = app()
        .oneshot(get_request("/some/client/route"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn static_assets_have_content_types() {
    for (path, expected) in [("/app.js", "javascript"), ("/styles.css", "text/css")] {
        let response = app().oneshot(get_request(path)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains(expected), "{path}: {content_type}");
    }
}

#[tokio::test]
async fn summarize_returns_five_sentences_in_order() {
    let text = "One apple. Two apples. Three apples fell. Four pears. \
                Five apples rot. Six apples. Seven figs.";
    let (status, body) = send(app(), post_request("/api/summarize", text)).await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_array().expect("summary array");
    assert_eq!(summary.len(), 5);
    assert_eq!(summary[0], "One apple.");
}

#[tokio::test]
async fn summarize_rejects_empty_body() {
    let (status, body) = send(app(), post_request("/api/summarize", "  \n ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "empty body" }));
}

#[tokio::test]
async fn fetch_requires_url() {
    for uri in ["/api/fetch", "/api/fetch?url=", "/api/fetch?url=%20%20"] {
        let (status, body) = send(app(), get_request(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "missing url" }));
    }
}

#[tokio::test]
async fn fetch_rejects_malformed_url() {
    let (status, body) = send(app(), get_request("/api/fetch?url=ftp%3A%2F%2Fhost%2Ffile")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn autopilot_rejects_bad_json_and_missing_url() {
    for body in ["not json", "{}", r#"{"url":""}"#] {
        let (status, value) = send(app(), post_request("/api/autopilot", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(value, json!({ "error": "missing url" }));
    }
}

#[tokio::test]
async fn fetch_extracts_upstream_page() {
    let origin = spawn_origin().await;
    let url = format!("http://{origin}/product");
    let uri = format!("/api/fetch?url={}", url.replace(':', "%3A").replace('/', "%2F"));

    let (status, body) = send(app(), get_request(&uri)).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["url"], url);
    assert_eq!(body["title"], "Kettle Shop");
    assert_eq!(body["headings"], json!(["Steel kettle"]));
    assert_eq!(body["links"], json!(["/buy", "/home"]));
    assert_eq!(body["prices"], json!(["$24.99"]));
    assert!(!body["text"].as_str().unwrap_or_default().contains("Home"));
}

#[tokio::test]
async fn autopilot_fetches_and_summarizes() {
    let origin = spawn_origin().await;
    let request = json!({ "url": format!("http://{origin}/product") }).to_string();

    let (status, body) = send(app(), post_request("/api/autopilot", request)).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["meta"]["title"], "Kettle Shop");
    let summary = body["summary"].as_array().expect("summary array");
    assert!(!summary.is_empty() && summary.len() <= 5);
}

#[tokio::test]
async fn upstream_error_status_is_bad_gateway() {
    let origin = spawn_origin().await;
    let uri = format!("/api/fetch?url=http%3A%2F%2F{origin}%2Fmissing");

    let (status, body) = send(app(), get_request(&uri)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().is_some_and(|e| e.contains("404")));
}
