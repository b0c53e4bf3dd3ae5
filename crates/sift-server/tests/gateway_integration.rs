//! End-to-end gateway tests: real TCP listener, real HTTP client, mock scorer.

use std::sync::Arc;
use std::time::Duration;

use sift::batch::BatchOrchestrator;
use sift::cache::ScoreCache;
use sift::scoring::MockScorer;
use sift_server::gateway::{HandlerState, create_router_with_state};

const DEFAULT_THRESHOLD: f32 = 0.7;

async fn spawn_server(scorer: MockScorer) -> String {
    let cache = Arc::new(ScoreCache::new(32).expect("valid capacity"));
    let orchestrator = Arc::new(BatchOrchestrator::new(cache, scorer, DEFAULT_THRESHOLD));
    let state = HandlerState::new(orchestrator, None, 100);
    let app = create_router_with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn test_health_over_the_wire() {
    let base = spawn_server(MockScorer::new()).await;

    let response = client()
        .get(format!("{base}/healthz"))
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_check_flow_over_the_wire() {
    let scorer = MockScorer::new()
        .with_score("rude", 0.95)
        .with_score("nice", 0.05);
    let base = spawn_server(scorer.clone()).await;
    let client = client();
    let payload = serde_json::json!({"texts": ["rude", "nice", "rude"]});

    let response = client
        .post(format!("{base}/v1/check"))
        .json(&payload)
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("x-sift-cache")
            .and_then(|v| v.to_str().ok()),
        Some("MISS")
    );

    let body: serde_json::Value = response.json().await.expect("json body");
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["hateful"], true);
    assert_eq!(results[1]["hateful"], false);
    assert_eq!(results[0]["score"], results[2]["score"]);

    // Duplicate within the batch was deduplicated before scoring.
    assert_eq!(scorer.call_count(), 1);
    assert_eq!(scorer.calls()[0].len(), 2);

    // Identical batch again: full cache hit, scorer untouched.
    let response = client
        .post(format!("{base}/v1/check"))
        .json(&payload)
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(
        response
            .headers()
            .get("x-sift-cache")
            .and_then(|v| v.to_str().ok()),
        Some("HIT")
    );
    assert_eq!(scorer.call_count(), 1);
}

#[tokio::test]
async fn test_cors_preflight_allows_extension_origins() {
    let base = spawn_server(MockScorer::new()).await;

    let response = client()
        .request(reqwest::Method::OPTIONS, format!("{base}/v1/check"))
        .header("origin", "https://www.youtube.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("preflight succeeds");

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
