//! Wire types for the POS backend endpoints.
//!
//! Field names on the wire are the backend's (Spanish); the structs rename
//! them so the rest of the codebase stays in one language.

use comandera_core::{CartLine, CustomerId, MenuItemId, Money};
use serde::{Deserialize, Serialize};

/// Header carrying the anti-forgery token on every POST.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body of `POST /garzon/agregar_cliente_externo/`.
#[derive(Debug, Serialize)]
pub struct CreateCustomerRequest<'a> {
    /// Customer name, already trimmed.
    #[serde(rename = "nombre")]
    pub name: &'a str,
}

/// Response of `POST /garzon/agregar_cliente_externo/`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerResponse {
    /// Whether the backend accepted the customer.
    pub ok: bool,
    /// Backend-assigned id (present when `ok`).
    pub id: Option<CustomerId>,
    /// Name as stored by the backend (present when `ok`).
    #[serde(rename = "nombre")]
    pub name: Option<String>,
}

/// One order line as the backend expects it.
#[derive(Debug, Serialize)]
pub struct OrderItem {
    /// Menu item id.
    pub id: MenuItemId,
    /// Item name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Money,
    /// Units ordered.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.item_id,
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Body of `POST /garzon/enviar_comanda/{order_id}/`.
#[derive(Debug, Serialize)]
pub struct SubmitOrderRequest {
    /// All cart lines; empty for an empty cart.
    pub items: Vec<OrderItem>,
}

/// Response of `POST /garzon/enviar_comanda/{order_id}/`.
#[derive(Debug, Deserialize)]
pub struct SubmitOrderResponse {
    /// Whether the backend accepted the order.
    pub ok: bool,
    /// Where the front-end should navigate on success.
    pub redirect: Option<String>,
}
