//! Integration Tests for API Endpoints
//!
//! Tests the full lookup pipeline against a local mock upstream that counts
//! how many times it was hit, so cache behavior is observable end to end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use beu_result_proxy::api::create_router;
use beu_result_proxy::{AppState, Config};

// == Helper Functions ==

/// Spawns a mock upstream on an ephemeral port serving a fixed body, and
/// returns its endpoint URL plus the request counter.
async fn spawn_mock_upstream(body: &'static str) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let app = Router::new().route(
        "/get-result",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                body
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/get-result", addr), calls)
}

fn create_app(upstream_base: String, cache_ttl_secs: u64) -> Router {
    let config = Config {
        upstream_base,
        cache_ttl_secs,
        fetch_timeout_secs: 2,
        ..Default::default()
    };
    create_router(AppState::from_config(&config))
}

async fn get_response(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// == Validation Tests ==

#[tokio::test]
async fn test_invalid_registration_number_returns_400_without_upstream_call() {
    let (base, calls) = spawn_mock_upstream(r#"{"data":{}}"#).await;
    let app = create_app(base, 300);

    for bad in ["12ab", "123", "", "123456789012345678901"] {
        let (status, json) = get_response(&app, &format!("/api/result?redg_no={}", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "redg_no={:?}", bad);
        assert!(json.get("error").is_some());
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// == Cache Behavior Tests ==

#[tokio::test]
async fn test_second_identical_lookup_is_served_from_cache() {
    let (base, calls) = spawn_mock_upstream(r#"{"data":{"redg_no":"21104134001"}}"#).await;
    let app = create_app(base, 300);

    let uri = "/api/result?redg_no=21104134001&semester=III&year=2025";

    let (status, first) = get_response(&app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["source"], "upstream");
    assert_eq!(first["data"]["registrationNo"], "21104134001");

    let (status, second) = get_response(&app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["source"], "cache");
    assert_eq!(second["data"], first["data"]);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_stale_entry_triggers_a_fresh_upstream_call() {
    let (base, calls) = spawn_mock_upstream(r#"{"data":{"redg_no":"21104134002"}}"#).await;
    let app = create_app(base, 1);

    let uri = "/api/result?redg_no=21104134002&year=2025";

    let (_, first) = get_response(&app, uri).await;
    assert_eq!(first["source"], "upstream");

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (_, second) = get_response(&app, uri).await;
    assert_eq!(second["source"], "upstream");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_different_exam_period_is_a_separate_cache_entry() {
    let (base, calls) = spawn_mock_upstream(r#"{"data":{"redg_no":"21104134003"}}"#).await;
    let app = create_app(base, 300);

    let (_, _) = get_response(&app, "/api/result?redg_no=21104134003&year=2025").await;
    let (_, _) = get_response(
        &app,
        "/api/result?redg_no=21104134003&year=2025&month=July",
    )
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// == Normalization Tests ==

#[tokio::test]
async fn test_flat_subjects_are_classified_into_theory_and_practical() {
    let (base, _) = spawn_mock_upstream(
        r#"{"data":{"redg_no":"123456","subjects":[{"code":"CS101","name":"Maths"},{"code":"CS101P","name":"Maths Lab"}]}}"#,
    )
    .await;
    let app = create_app(base, 300);

    let (status, json) = get_response(&app, "/api/result?redg_no=123456").await;
    assert_eq!(status, StatusCode::OK);

    let theory = json["data"]["theorySubjects"].as_array().unwrap();
    let practical = json["data"]["practicalSubjects"].as_array().unwrap();
    assert_eq!(theory.len(), 1);
    assert_eq!(theory[0]["code"], "CS101");
    assert_eq!(practical.len(), 1);
    assert_eq!(practical[0]["code"], "CS101P");
}

#[tokio::test]
async fn test_non_json_upstream_body_degrades_to_raw_with_200() {
    let (base, calls) = spawn_mock_upstream("<html>Error</html>").await;
    let app = create_app(base, 300);

    let uri = "/api/result?redg_no=21104134004";
    let (status, json) = get_response(&app, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["raw"], "<html>Error</html>");

    // Raw fallbacks are cached too, shielding the flaky upstream.
    let (_, second) = get_response(&app, uri).await;
    assert_eq!(second["source"], "cache");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// == CORS / Method Dispatch Tests ==

#[tokio::test]
async fn test_options_returns_204_with_cors_headers_and_no_body() {
    let (base, _) = spawn_mock_upstream("{}").await;
    let app = create_app(base, 300);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/result")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET,OPTIONS"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "Content-Type"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_post_returns_405_with_allow_header() {
    let (base, calls) = spawn_mock_upstream("{}").await;
    let app = create_app(base, 300);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/result?redg_no=12345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers().get(header::ALLOW).unwrap(),
        "GET, OPTIONS"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json.get("error").is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// == Error Path Tests ==

#[tokio::test]
async fn test_slow_upstream_is_bounded_by_fetch_timeout() {
    // The mock answers only after 30 seconds; the 1 second client timeout
    // must cut the fetch off and surface a structured 500.
    let app = Router::new().route(
        "/get-result",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "{}"
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config {
        upstream_base: format!("http://{}/get-result", addr),
        cache_ttl_secs: 300,
        fetch_timeout_secs: 1,
        ..Default::default()
    };
    let proxy = create_router(AppState::from_config(&config));

    let (status, json) = get_response(&proxy, "/api/result?redg_no=21104134008").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("Upstream"));
}

#[tokio::test]
async fn test_unreachable_upstream_returns_structured_500() {
    // Nothing listens on this port; reqwest fails fast with a connect error.
    let app = create_app("http://127.0.0.1:9/get-result".to_string(), 300);

    let (status, json) = get_response(&app, "/api/result?redg_no=21104134005").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("Upstream"));
}

// == Renderer Endpoint Tests ==

#[tokio::test]
async fn test_view_endpoint_renders_marksheet_with_gpa_row() {
    let (base, _) = spawn_mock_upstream(
        r#"{"data":{"redg_no":"21104134006","name":"A STUDENT","sgpa":[8.1,7.9,8.5],"cgpa":8.17,"remarks":"Pass"}}"#,
    )
    .await;
    let app = create_app(base, 300);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/view?redg_no=21104134006&semester=III&year=2025")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("A STUDENT"));
    assert!(html.contains("<td>8.1</td><td>7.9</td><td>8.5</td>"));
    // Slots 4-8 unfilled
    assert!(html.contains("<td>-</td><td>-</td><td>-</td><td>-</td><td>-</td>"));
    assert!(html.contains("REMARKS: PASS"));
    assert!(!html.contains("window.print"));
}

#[tokio::test]
async fn test_view_renders_from_cached_lookup_without_refetching() {
    let (base, calls) = spawn_mock_upstream(
        r#"{"data":{"redg_no":"21104134009","name":"CACHED STUDENT","sgpa":[7.5]}}"#,
    )
    .await;
    let app = create_app(base, 300);

    // First lookup populates the cache.
    let (status, _) = get_response(&app, "/api/result?redg_no=21104134009&year=2025").await;
    assert_eq!(status, StatusCode::OK);

    // The rendered view comes from the cached payload.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/result/view?redg_no=21104134009&year=2025")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("CACHED STUDENT"));
    assert!(html.contains("<td>7.5</td>"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_print_endpoint_includes_print_trigger() {
    let (base, _) = spawn_mock_upstream(r#"{"data":{"redg_no":"21104134007"}}"#).await;
    let app = create_app(base, 300);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/print?redg_no=21104134007")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("window.print"));
}
