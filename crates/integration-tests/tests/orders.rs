//! Integration tests for the order builder: cart mutations, tab switches,
//! the review summary, and the submit flow.

use comandera_integration_tests::{StubPos, client, spawn_waiter};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn increment_updates_controls_and_total() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .post(format!("{}/orders/7/items/1/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("HX-Trigger").and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let fragment = resp.text().await.expect("controls fragment");
    assert!(fragment.contains(">1</span>"));

    let total = client
        .get(format!("{}/orders/7/total", waiter.base_url))
        .send()
        .await
        .expect("total")
        .text()
        .await
        .expect("total text");
    assert!(total.contains("$2.500"));
}

#[tokio::test]
async fn cart_survives_category_switches() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    for _ in 0..2 {
        client
            .post(format!("{}/orders/7/items/1/increment", waiter.base_url))
            .send()
            .await
            .expect("increment");
    }

    // Switch to Drinks and back to Starters
    let drinks = client
        .get(format!(
            "{}/orders/7/items?category=Drinks",
            waiter.base_url
        ))
        .send()
        .await
        .expect("drinks fragment")
        .text()
        .await
        .expect("drinks text");
    assert!(drinks.contains("Pisco sour"));

    let starters = client
        .get(format!(
            "{}/orders/7/items?category=Starters",
            waiter.base_url
        ))
        .send()
        .await
        .expect("starters fragment")
        .text()
        .await
        .expect("starters text");

    // The quantity from before the switch is still there
    assert!(starters.contains(">2</span>"));

    let total = client
        .get(format!("{}/orders/7/total", waiter.base_url))
        .send()
        .await
        .expect("total")
        .text()
        .await
        .expect("total text");
    assert!(total.contains("$5.000"));
}

#[tokio::test]
async fn unknown_category_renders_empty_list() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .get(format!(
            "{}/orders/7/items?category=Desserts",
            waiter.base_url
        ))
        .send()
        .await
        .expect("fragment");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("fragment text");
    assert!(!body.contains("menu-item"));
}

#[tokio::test]
async fn decrement_absent_item_is_noop() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .post(format!("{}/orders/7/items/1/decrement", waiter.base_url))
        .send()
        .await
        .expect("decrement");
    assert_eq!(resp.status(), StatusCode::OK);

    let total = client
        .get(format!("{}/orders/7/total", waiter.base_url))
        .send()
        .await
        .expect("total")
        .text()
        .await
        .expect("total text");
    assert!(total.contains("$0"));
}

#[tokio::test]
async fn increment_unknown_item_is_not_found() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .post(format!("{}/orders/7/items/999/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn carts_are_independent_per_order() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    client
        .post(format!("{}/orders/7/items/1/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");

    let other_total = client
        .get(format!("{}/orders/8/total", waiter.base_url))
        .send()
        .await
        .expect("total")
        .text()
        .await
        .expect("total text");
    assert!(other_total.contains("$0"));
}

#[tokio::test]
async fn empty_cart_summary_shows_message_and_confirm_sends_empty_items() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let summary = client
        .get(format!("{}/orders/7/summary", waiter.base_url))
        .send()
        .await
        .expect("summary")
        .text()
        .await
        .expect("summary text");
    assert!(summary.contains("No items selected."));

    // Reviewing the summary sends nothing
    assert_eq!(pos.request_count(), 0);

    let resp = client
        .post(format!("{}/orders/7/send", waiter.base_url))
        .send()
        .await
        .expect("send");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Redirect")
            .and_then(|v| v.to_str().ok()),
        Some("/garzon/comanda/7/")
    );

    let requests = pos.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/garzon/enviar_comanda/7/");
    assert_eq!(requests[0].body, json!({"items": []}));
}

#[tokio::test]
async fn summary_lists_lines_with_subtotals_and_total() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    for _ in 0..2 {
        client
            .post(format!("{}/orders/7/items/1/increment", waiter.base_url))
            .send()
            .await
            .expect("increment");
    }
    client
        .post(format!("{}/orders/7/items/20/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");

    let summary = client
        .get(format!("{}/orders/7/summary", waiter.base_url))
        .send()
        .await
        .expect("summary")
        .text()
        .await
        .expect("summary text");

    assert!(summary.contains("Empanada x 2 - $5.000"));
    assert!(summary.contains("Pisco sour x 1 - $4.500"));
    assert!(summary.contains("Total: $9.500"));
}

#[tokio::test]
async fn send_submits_cart_lines_and_clears_cart() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    client
        .post(format!("{}/orders/3/items/1/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");

    let resp = client
        .post(format!("{}/orders/3/send", waiter.base_url))
        .send()
        .await
        .expect("send");
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = pos.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        json!({"items": [{"id": 1, "nombre": "Empanada", "precio": "2500", "cantidad": 1}]})
    );

    // Success clears the cart for that order
    let total = client
        .get(format!("{}/orders/3/total", waiter.base_url))
        .send()
        .await
        .expect("total")
        .text()
        .await
        .expect("total text");
    assert!(total.contains("$0"));
}

#[tokio::test]
async fn failed_send_keeps_cart_for_retry() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    client
        .post(format!("{}/orders/3/items/1/increment", waiter.base_url))
        .send()
        .await
        .expect("increment");

    pos.reject_requests(true);
    let resp = client
        .post(format!("{}/orders/3/send", waiter.base_url))
        .send()
        .await
        .expect("send");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    // Cart is untouched, so the retry submits the same lines
    pos.reject_requests(false);
    let resp = client
        .post(format!("{}/orders/3/send", waiter.base_url))
        .send()
        .await
        .expect("retry send");
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = pos.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn order_page_renders_tabs_and_first_category() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let page = client
        .get(format!("{}/orders/7", waiter.base_url))
        .send()
        .await
        .expect("order page")
        .text()
        .await
        .expect("page text");

    assert!(page.contains("Starters"));
    assert!(page.contains("Drinks"));
    // First category's items render initially
    assert!(page.contains("Empanada"));
    assert!(!page.contains("Pisco sour"));
    assert!(page.contains("Total: $0"));
}
