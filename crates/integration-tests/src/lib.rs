//! Shared helpers for Orderdesk integration tests.
//!
//! Provides a scripted mock order endpoint: an axum router bound to an
//! ephemeral local port, so tests drive the real fetch path without touching
//! a live service. Sample order data lives here too - it is a test fixture,
//! never a runtime fallback.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test support code

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;
use axum::routing::get;

use orderdesk_panel::config::PanelConfig;

/// Scripted behavior for the mock order endpoint.
#[derive(Clone)]
pub enum MockOrders {
    /// Respond 200 with the given JSON value.
    Json(serde_json::Value),
    /// Respond with the given status and an empty body.
    Status(u16),
    /// Respond 200 with a raw (possibly invalid) body.
    Raw(String),
    /// Sleep before every response, then serve the JSON value. Lets a test
    /// hold one cycle in flight while a faster one completes.
    Delay(Duration, serde_json::Value),
}

/// A running mock order endpoint.
pub struct MockEndpoint {
    /// Full URL of the orders route.
    pub url: String,
    /// Number of requests received.
    pub hits: Arc<AtomicUsize>,
}

impl MockEndpoint {
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Bind a mock order endpoint on an ephemeral port.
pub async fn spawn_orders_endpoint(script: MockOrders) -> MockEndpoint {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = Arc::clone(&hits);

    let app = Router::new().route(
        "/orders",
        get(move || {
            let script = script.clone();
            let hits = Arc::clone(&handler_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                match script {
                    MockOrders::Json(body) => json_response(StatusCode::OK, body.to_string()),
                    MockOrders::Status(code) => Response::builder()
                        .status(code)
                        .body(Body::empty())
                        .unwrap(),
                    MockOrders::Raw(body) => json_response(StatusCode::OK, body),
                    MockOrders::Delay(delay, body) => {
                        tokio::time::sleep(delay).await;
                        json_response(StatusCode::OK, body.to_string())
                    }
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockEndpoint {
        url: format!("http://{addr}/orders"),
        hits,
    }
}

fn json_response(status: StatusCode, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Panel configuration pointing at a mock endpoint, defaults otherwise.
#[must_use]
pub fn test_config(api_url: &str) -> PanelConfig {
    PanelConfig {
        api_url: api_url.to_string(),
        ..PanelConfig::default()
    }
}

/// Fixture order collection, shaped like the real endpoint's payload.
///
/// Two orders for `srinivasan.2021@vitalum.ac.in`, one for another customer,
/// one unattributable record without an email, and one with an unparseable
/// date that the decode boundary must drop.
#[must_use]
pub fn sample_orders() -> serde_json::Value {
    serde_json::json!([
        {
            "order_id": "SE-100199",
            "customer_external_id": "user1",
            "customer_email": "srinivasan.2021@vitalum.ac.in",
            "date_placed": "2024-02-10",
            "status": "Processing Return",
            "total_amount": 780.00,
            "currency": "USD",
            "summary_items": "1x DSLR Camera"
        },
        {
            "order_id": "SE-100399",
            "customer_external_id": "user1",
            "customer_email": "srinivasan.2021@vitalum.ac.in",
            "date_placed": "2024-05-12",
            "status": "Delivered",
            "total_amount": 1250.00,
            "currency": "USD",
            "summary_items": "1x 55-inch 4K TV"
        },
        {
            "order_id": "SE-200299",
            "customer_external_id": "user2",
            "customer_email": "other.customer@example.com",
            "date_placed": "2024-02-25",
            "status": "Delivered",
            "total_amount": 75.00,
            "currency": "USD",
            "summary_items": "1x Backpack, 1x Laptop Sleeve"
        },
        {
            "order_id": "SE-300000",
            "date_placed": "2024-03-01",
            "status": "Delivered",
            "total_amount": 10.00,
            "currency": "USD",
            "summary_items": "1x Gift Card"
        },
        {
            "order_id": "SE-999999",
            "customer_email": "srinivasan.2021@vitalum.ac.in",
            "date_placed": "not-a-date",
            "status": "Delivered",
            "total_amount": 1.00,
            "currency": "USD",
            "summary_items": "1x Corrupted Row"
        }
    ])
}
