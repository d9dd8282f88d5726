//! Integration tests for the customer list flow.

use comandera_integration_tests::{StubPos, TEST_CSRF_TOKEN, client, spawn_waiter};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_customer_sends_trimmed_name_and_csrf_token() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .post(format!("{}/customers", waiter.base_url))
        .form(&[("name", "  Juan  ")])
        .send()
        .await
        .expect("create customer");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("read card fragment");
    assert!(body.contains("Juan"));
    assert!(body.contains("just now"));

    let requests = pos.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/garzon/agregar_cliente_externo/");
    assert_eq!(requests[0].body, json!({"nombre": "Juan"}));
    assert_eq!(requests[0].csrf.as_deref(), Some(TEST_CSRF_TOKEN));
}

#[tokio::test]
async fn whitespace_only_name_is_rejected_without_calling_pos() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    let resp = client
        .post(format!("{}/customers", waiter.base_url))
        .form(&[("name", "   ")])
        .send()
        .await
        .expect("create customer");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.expect("read error fragment");
    assert!(body.contains("name cannot be empty"));

    assert_eq!(pos.request_count(), 0);
}

#[tokio::test]
async fn rejected_creation_surfaces_error_and_leaves_list_unchanged() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    pos.reject_requests(true);

    let resp = client
        .post(format!("{}/customers", waiter.base_url))
        .form(&[("name", "Juan")])
        .send()
        .await
        .expect("create customer");

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let list = client
        .get(format!("{}/customers", waiter.base_url))
        .send()
        .await
        .expect("get customer list")
        .text()
        .await
        .expect("read customer list");
    assert!(!list.contains("customer-card"));
}

#[tokio::test]
async fn created_customer_appears_in_list_with_order_link() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    client
        .post(format!("{}/customers", waiter.base_url))
        .form(&[("name", "Ana")])
        .send()
        .await
        .expect("create customer");

    let list = client
        .get(format!("{}/customers", waiter.base_url))
        .send()
        .await
        .expect("get customer list")
        .text()
        .await
        .expect("read customer list");

    assert!(list.contains("Ana"));
    // The stub assigns ids from 1; the card links to that customer's order page
    assert!(list.contains("/orders/1"));
}

#[tokio::test]
async fn newest_customer_is_listed_first() {
    let pos = StubPos::spawn().await;
    let waiter = spawn_waiter(&pos).await;
    let client = client();

    for name in ["Ana", "Juan"] {
        client
            .post(format!("{}/customers", waiter.base_url))
            .form(&[("name", name)])
            .send()
            .await
            .expect("create customer");
    }

    let list = client
        .get(format!("{}/customers", waiter.base_url))
        .send()
        .await
        .expect("get customer list")
        .text()
        .await
        .expect("read customer list");

    let juan = list.find("Juan").expect("Juan in list");
    let ana = list.find("Ana").expect("Ana in list");
    assert!(juan < ana, "most recent customer should be first");
}
