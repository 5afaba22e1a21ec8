//! Integration tests for the session cart flow.
//!
//! Cart routes never touch the upstream API, so these tests point the app at
//! an upstream that serves nothing.

use axum::Router;
use reqwest::StatusCode;
use serde_json::{Value, json};

use sapling_integration_tests::{TestApp, client, spawn_app, spawn_upstream};

async fn cart_app() -> TestApp {
    let upstream = spawn_upstream(Router::new()).await;
    spawn_app(&upstream).await
}

async fn add_item(http: &reqwest::Client, app: &TestApp, key: &str, price: &str) -> Value {
    http.post(format!("{}/api/cart/items", app.base_url))
        .json(&json!({"key": key, "name": key, "price": price}))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON")
}

#[tokio::test]
async fn test_add_twice_then_remove_empties_the_cart() {
    let app = cart_app().await;
    let http = client();

    add_item(&http, &app, "p1", "120").await;
    let cart = add_item(&http, &app, "p1", "120").await;

    // one line with quantity 2, never two lines
    assert_eq!(
        cart,
        json!({
            "lines": [{"key": "p1", "name": "p1", "price": "120", "quantity": 2}],
            "total": "240"
        })
    );

    let cart: Value = http
        .delete(format!("{}/api/cart/items/0", app.base_url))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");

    assert_eq!(cart, json!({"lines": [], "total": "0"}));
}

#[tokio::test]
async fn test_insertion_order_is_preserved_across_increments() {
    let app = cart_app().await;
    let http = client();

    add_item(&http, &app, "p1", "120").await;
    add_item(&http, &app, "p2", "80").await;
    let cart = add_item(&http, &app, "p1", "120").await;

    let keys: Vec<&str> = cart["lines"]
        .as_array()
        .expect("lines should be a list")
        .iter()
        .map(|line| line["key"].as_str().expect("key should be a string"))
        .collect();
    assert_eq!(keys, vec!["p1", "p2"]);
    assert_eq!(cart["total"], json!("320"));
}

#[tokio::test]
async fn test_remove_with_stale_index_is_a_no_op() {
    let app = cart_app().await;
    let http = client();

    let before = add_item(&http, &app, "p1", "120").await;

    let response = http
        .delete(format!("{}/api/cart/items/5", app.base_url))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let after: Value = response.json().await.expect("invalid JSON");
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_carts_are_scoped_to_the_browsing_session() {
    let app = cart_app().await;

    let first = client();
    add_item(&first, &app, "p1", "120").await;

    // a different client has its own session, and an empty cart
    let second = client();
    let cart: Value = second
        .get(format!("{}/api/cart", app.base_url))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");

    assert_eq!(cart, json!({"lines": [], "total": "0"}));
}
