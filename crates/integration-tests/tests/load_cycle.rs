//! End-to-end load cycles against a mock order endpoint.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use orderdesk_integration_tests::{MockOrders, sample_orders, spawn_orders_endpoint, test_config};
use orderdesk_panel::cycle::{Session, ViewState};
use orderdesk_panel::identity::HostContext;
use orderdesk_panel::orders::OrderSource;

fn context(value: serde_json::Value) -> HostContext {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn ready_view_for_matching_customer() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let config = test_config(&endpoint.url);
    let source = OrderSource::new(&config).unwrap();
    let session = Session::new();

    // Query email cased differently from the records on the wire
    let context = context(serde_json::json!({
        "contact": { "name": "Srinivasan A", "email": "SRINIVASAN.2021@VITALUM.AC.IN" }
    }));

    let state = session
        .run(&context.providers(), &source, 10)
        .await
        .unwrap();

    match state {
        ViewState::Ready { view } => {
            assert_eq!(view.contact.name, "Srinivasan A");
            assert_eq!(view.summary.total_orders, 2);
            assert_eq!(view.summary.total_spent, Decimal::new(203_000, 2));
            // Fixture dates are long past any 30-day window
            assert_eq!(view.summary.recent_orders, 0);

            let ids: Vec<_> = view.orders.iter().map(|o| o.order_id.as_str()).collect();
            assert_eq!(ids, ["SE-100399", "SE-100199"], "newest first");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn display_limit_truncates_ready_view() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let config = test_config(&endpoint.url);
    let source = OrderSource::new(&config).unwrap();
    let session = Session::new();

    let context = context(serde_json::json!({
        "contact": { "email": "srinivasan.2021@vitalum.ac.in" }
    }));

    let state = session.run(&context.providers(), &source, 1).await.unwrap();

    match state {
        ViewState::Ready { view } => {
            // Summary still covers every matching order; only display is cut
            assert_eq!(view.summary.total_orders, 2);
            assert_eq!(view.orders.len(), 1);
            assert_eq!(view.orders[0].order_id, "SE-100399");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_is_a_success_state() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let config = test_config(&endpoint.url);
    let source = OrderSource::new(&config).unwrap();
    let session = Session::new();

    let context = context(serde_json::json!({
        "contact": { "email": "nobody@example.com" }
    }));

    let state = session
        .run(&context.providers(), &source, 10)
        .await
        .unwrap();

    match state {
        ViewState::Empty { contact } => {
            assert_eq!(contact.email.as_str(), "nobody@example.com");
            assert_eq!(contact.name, "nobody");
        }
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[tokio::test]
async fn identity_falls_back_past_sources_without_email() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let config = test_config(&endpoint.url);
    let source = OrderSource::new(&config).unwrap();
    let session = Session::new();

    let context = context(serde_json::json!({
        "contact": { "name": "Agent View, No Email" },
        "requester": { "firstName": "Srinivasan", "email": "srinivasan.2021@vitalum.ac.in" }
    }));

    let state = session
        .run(&context.providers(), &source, 10)
        .await
        .unwrap();

    match state {
        ViewState::Ready { view } => {
            assert_eq!(view.contact.name, "Srinivasan");
            assert_eq!(view.summary.total_orders, 2);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn view_model_is_recomputed_wholesale_per_cycle() {
    let endpoint = spawn_orders_endpoint(MockOrders::Json(sample_orders())).await;
    let config = test_config(&endpoint.url);
    let source = OrderSource::new(&config).unwrap();
    let session = Session::new();

    let first = context(serde_json::json!({
        "contact": { "email": "srinivasan.2021@vitalum.ac.in" }
    }));
    let second = context(serde_json::json!({
        "contact": { "email": "other.customer@example.com" }
    }));

    session.run(&first.providers(), &source, 10).await.unwrap();
    let state = session
        .run(&second.providers(), &source, 10)
        .await
        .unwrap();

    match state {
        ViewState::Ready { view } => {
            // Nothing from the first cycle leaks into the second
            assert_eq!(view.contact.email.as_str(), "other.customer@example.com");
            assert_eq!(view.summary.total_orders, 1);
            assert_eq!(view.orders[0].order_id, "SE-200299");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}
