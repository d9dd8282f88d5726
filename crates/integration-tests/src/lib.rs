//! Integration tests for Comandera.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p comandera-integration-tests
//! ```
//!
//! Everything runs in-process: each test spawns a stub POS backend and a
//! waiter app on ephemeral ports, then drives the waiter over HTTP with a
//! cookie-holding client. No external services are required.
//!
//! # Test Categories
//!
//! - `customers` - Customer list and creation flow
//! - `orders` - Cart mutations, summary, and the submit flow
//! - `pos_client` - The POS backend client against the stub, directly

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::post,
};
use serde_json::{Value, json};

use comandera_core::{Menu, MenuCategory, MenuItem, MenuItemId, Money};
use comandera_waiter::config::{PosConfig, WaiterConfig};
use comandera_waiter::state::AppState;
use secrecy::SecretString;

/// The anti-forgery token the stub POS expects the waiter to send.
pub const TEST_CSRF_TOKEN: &str = "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6";

/// One request recorded by the stub POS backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path, e.g. `/garzon/enviar_comanda/7/`.
    pub path: String,
    /// Value of the `X-CSRFToken` header, if present.
    pub csrf: Option<String>,
    /// The JSON body as received.
    pub body: Value,
}

#[derive(Default)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    reject: AtomicBool,
    next_customer_id: AtomicI64,
}

/// Stub POS backend: records every request and answers the two endpoints the
/// waiter consumes. Can be switched into rejection mode (`ok: false`).
#[derive(Clone)]
pub struct StubPos {
    /// Base URL of the running stub.
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubPos {
    /// Bind the stub to an ephemeral port and start serving.
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState {
            next_customer_id: AtomicI64::new(1),
            ..StubState::default()
        });

        let router = Router::new()
            .route("/garzon/agregar_cliente_externo/", post(stub_create_customer))
            .route("/garzon/enviar_comanda/{order_id}/", post(stub_submit_order))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub POS listener");
        let addr = listener.local_addr().expect("stub POS local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve stub POS");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Make subsequent requests answer `{"ok": false}`.
    pub fn reject_requests(&self, reject: bool) {
        self.state.reject.store(reject, Ordering::SeqCst);
    }

    /// Snapshot of every recorded request, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests the stub has received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

fn record(state: &StubState, path: String, headers: &HeaderMap, body: Value) {
    let csrf = headers
        .get("X-CSRFToken")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest { path, csrf, body });
}

async fn stub_create_customer(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(
        &state,
        "/garzon/agregar_cliente_externo/".to_string(),
        &headers,
        body.clone(),
    );

    if state.reject.load(Ordering::SeqCst) {
        return Json(json!({"ok": false}));
    }

    let id = state.next_customer_id.fetch_add(1, Ordering::SeqCst);
    let name = body
        .get("nombre")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Json(json!({"ok": true, "id": id, "nombre": name}))
}

async fn stub_submit_order(
    State(state): State<Arc<StubState>>,
    Path(order_id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(
        &state,
        format!("/garzon/enviar_comanda/{order_id}/"),
        &headers,
        body.clone(),
    );

    if state.reject.load(Ordering::SeqCst) {
        return Json(json!({"ok": false}));
    }

    Json(json!({"ok": true, "redirect": format!("/garzon/comanda/{order_id}/")}))
}

/// A waiter app bound to an ephemeral port, wired to a stub POS.
pub struct TestWaiter {
    /// Base URL of the running waiter.
    pub base_url: String,
}

/// Start the waiter app against the given stub POS, with [`test_menu`].
pub async fn spawn_waiter(pos: &StubPos) -> TestWaiter {
    let config = WaiterConfig {
        host: "127.0.0.1".parse().expect("parse host"),
        port: 0,
        base_url: "http://localhost".to_string(),
        // The menu is injected directly; the path is never read in tests.
        menu_path: PathBuf::from("unused-in-tests.json"),
        pos: PosConfig {
            base_url: pos.base_url.clone(),
            csrf_token: SecretString::from(TEST_CSRF_TOKEN),
        },
        sentry_dsn: None,
    };

    let state = AppState::new(config, test_menu());
    let app = comandera_waiter::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind waiter listener");
    let addr = listener.local_addr().expect("waiter local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve waiter");
    });

    TestWaiter {
        base_url: format!("http://{addr}"),
    }
}

/// The fixed menu used across integration tests.
///
/// Two categories so tab-switch behavior can be exercised:
/// - Starters: Empanada (id 1, $2.500), Sopaipillas (id 2, $1.800)
/// - Drinks: Pisco sour (id 20, $4.500)
#[must_use]
pub fn test_menu() -> Menu {
    let item = |id: i64, name: &str, pesos: i64| MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        ingredients: String::new(),
        price: Money::from_pesos(pesos),
        image_url: None,
    };

    Menu::new(vec![
        MenuCategory {
            name: "Starters".to_string(),
            items: vec![item(1, "Empanada", 2500), item(2, "Sopaipillas", 1800)],
        },
        MenuCategory {
            name: "Drinks".to_string(),
            items: vec![item(20, "Pisco sour", 4500)],
        },
    ])
}

/// An HTTP client that keeps session cookies, like a browser would.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("build HTTP client")
}
