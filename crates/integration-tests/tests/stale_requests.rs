//! Integration tests for the stale-response guard.
//!
//! When the user switches categories quickly, a slow response for an earlier
//! selection must not overwrite the newer render. The service discards such
//! responses; the route answers 204 so the widget keeps what it has.

use std::time::Duration;

use axum::{Json, Router, routing::get};
use reqwest::StatusCode;
use serde_json::{Value, json};

use sapling_integration_tests::{client, spawn_app, spawn_upstream};

fn racing_upstream() -> Router {
    Router::new()
        .route(
            "/plants",
            get(|| async {
                // the unfiltered list is slow
                tokio::time::sleep(Duration::from_millis(400)).await;
                Json(json!([{"plant_id": "all-1", "plant_name": "Banyan"}]))
            }),
        )
        .route(
            "/category/{id}",
            get(|| async { Json(json!([{"plant_id": "c5-1", "plant_name": "Mango"}])) }),
        )
}

#[tokio::test]
async fn test_slow_earlier_selection_is_discarded() {
    let upstream = spawn_upstream(racing_upstream()).await;
    let app = spawn_app(&upstream).await;
    let http = client();

    // select "all", then switch to category 5 while "all" is in flight
    let all_url = format!("{}/api/plants", app.base_url);
    let slow = tokio::spawn({
        let http = http.clone();
        async move { http.get(all_url).send().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let fast = http
        .get(format!("{}/api/plants?category=5", app.base_url))
        .send()
        .await
        .expect("request failed");
    assert_eq!(fast.status(), StatusCode::OK);
    let body: Value = fast.json().await.expect("invalid JSON");
    assert_eq!(body[0]["name"], json!("Mango"));

    // the earlier selection completes later and must not carry data
    let stale = slow
        .await
        .expect("task panicked")
        .expect("request failed");
    assert_eq!(stale.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_fresh_selection_after_a_discard_still_loads() {
    let upstream = spawn_upstream(racing_upstream()).await;
    let app = spawn_app(&upstream).await;
    let http = client();

    let all_url = format!("{}/api/plants", app.base_url);
    let slow = tokio::spawn({
        let http = http.clone();
        async move { http.get(all_url).send().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    http.get(format!("{}/api/plants?category=5", app.base_url))
        .send()
        .await
        .expect("request failed");
    slow.await.expect("task panicked").expect("request failed");

    // re-selecting "all" is now the newest request and renders normally
    let fresh = http
        .get(format!("{}/api/plants", app.base_url))
        .send()
        .await
        .expect("request failed");
    assert_eq!(fresh.status(), StatusCode::OK);
    let body: Value = fresh.json().await.expect("invalid JSON");
    assert_eq!(body[0]["name"], json!("Banyan"));
}
