//! The HTTP surface: activation trigger, displayed-state pull, and the fixed
//! error-to-message mapping.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use orderdesk_integration_tests::{MockOrders, sample_orders, spawn_orders_endpoint, test_config};
use orderdesk_panel::routes;
use orderdesk_panel::state::AppState;

/// Serve the real panel router on an ephemeral port.
async fn spawn_panel(api_url: &str) -> SocketAddr {
    let state = AppState::new(test_config(api_url)).unwrap();
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn activate_then_pull_view() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let panel = spawn_panel(&endpoint.url).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{panel}/panel/activate"))
        .json(&serde_json::json!({
            "contact": { "name": "Srinivasan A", "email": "srinivasan.2021@vitalum.ac.in" }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["state"], "ready");
    assert_eq!(body["view"]["summary"]["totalOrders"], 2);

    // The renderer's pull sees the same committed state
    let view: serde_json::Value = client
        .get(format!("http://{panel}/panel/view"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["state"], "ready");
    assert_eq!(view["view"]["contact"]["name"], "Srinivasan A");
}

#[tokio::test]
async fn view_is_idle_before_any_activation() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let panel = spawn_panel(&endpoint.url).await;

    let view: serde_json::Value = reqwest::get(format!("http://{panel}/panel/view"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["state"], "idle");
}

#[tokio::test]
async fn unresolved_identity_maps_to_fixed_message() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let panel = spawn_panel(&endpoint.url).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{panel}/panel/activate"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "identity_unresolved");
    assert_eq!(body["message"], "Could not identify the customer for this view.");
    assert_eq!(endpoint.hit_count(), 0);
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway_and_failed_view() {
    let endpoint = spawn_orders_endpoint(MockOrders::Status(500)).await;
    let panel = spawn_panel(&endpoint.url).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{panel}/panel/activate"))
        .json(&serde_json::json!({
            "contact": { "email": "srinivasan.2021@vitalum.ac.in" }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "network_error");
    assert_eq!(body["message"], "Could not reach the order service.");

    // The committed state carries the same fixed message for the renderer
    let view: serde_json::Value = client
        .get(format!("http://{panel}/panel/view"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["state"], "failed");
    assert_eq!(view["kind"], "network_error");
}

#[tokio::test]
async fn health_is_dependency_free() {
    // Point at a blank endpoint: health must still answer
    let panel = spawn_panel("   ").await;

    let response = reqwest::get(format!("http://{panel}/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}
